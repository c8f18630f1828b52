use serde::Deserialize;

// One entry of the EDSM sphere-systems response. EDSM sends more fields
// (id, coords, distance, ...) which this client has no use for.
#[derive(Debug, Deserialize)]
pub struct EdsmSystem {
    pub name: String,
}

// Decode a sphere-systems body into system names, keeping the upstream order.
pub fn decode_system_names(body: &str) -> Result<Vec<String>, serde_json::Error> {
    let systems: Vec<EdsmSystem> = serde_json::from_str(body)?;
    Ok(systems.into_iter().map(|system| system.name).collect())
}
