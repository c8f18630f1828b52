use crate::domain::{QueryError, SphereQuery, SystemsProvider};
use crate::interface_adapters::protocol::decode_system_names;
use reqwest::blocking::Client;
use url::Url;

pub const EDSM_SPHERE_SYSTEMS_URL: &str = "https://www.edsm.net/api-v1/sphere-systems";

// Thin wrapper around the blocking reqwest client for the EDSM sphere endpoint.
#[derive(Clone)]
pub struct EdsmClient {
    http: Client,
    pub base_url: String,
}

impl EdsmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn sphere_url(&self, query: &SphereQuery) -> Result<Url, url::ParseError> {
        let center = query.center;
        Url::parse_with_params(
            &self.base_url,
            &[
                ("x", center.x.to_string()),
                ("y", center.y.to_string()),
                ("z", center.z.to_string()),
                ("radius", query.radius.to_string()),
            ],
        )
    }
}

impl SystemsProvider for EdsmClient {
    #[tracing::instrument(
        name = "edsm_sphere_systems",
        skip_all,
        fields(center = %query.center, radius = query.radius)
    )]
    fn systems_in_sphere(&self, query: &SphereQuery) -> Result<Vec<String>, QueryError> {
        let url = self
            .sphere_url(query)
            .map_err(|err| QueryError::Network(Box::new(err)))?;
        tracing::debug!(%url, "requesting sphere systems.");

        let res = self
            .http
            .get(url)
            .send()
            .map_err(|err| QueryError::Network(Box::new(err)))?;
        let status = res.status();

        if !status.is_success() {
            tracing::warn!(%status, "edsm rejected sphere query.");
            return Err(QueryError::Status(status.as_u16()));
        }

        // Read the whole body first so transport failures stay apart from decode failures.
        let body = res
            .text()
            .map_err(|err| QueryError::Network(Box::new(err)))?;
        let names = decode_system_names(&body).map_err(|err| QueryError::Parse(Box::new(err)))?;

        tracing::info!(count = names.len(), "sphere systems received.");
        Ok(names)
    }
}
