//! Typed fetch client for the creature-data API.
//!
//! Every accessor is a single GET translated into a typed record. Non-2xx
//! statuses fail with the resource key (or URL) and the status text; a 2xx
//! body is decoded without further validation.

use std::sync::Arc;

use pokedex_domain::{
    Ability, ApiSettings, Page, PageOptions, Pokemon, PokemonType, ResourceKey, ResourceKind,
    Species,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::HttpFetcher;

/// Client for the upstream API.
///
/// The only state is the fixed base address. Callers that need
/// parallelism issue independent calls and join them themselves.
///
/// # Example
///
/// ```ignore
/// let api = PokeApi::new(Arc::new(ReqwestFetcher::new(&settings)?), settings);
/// let pikachu = api.pokemon(25).await?;
/// ```
pub struct PokeApi<F: HttpFetcher> {
    fetcher: Arc<F>,
    settings: ApiSettings,
}

impl<F: HttpFetcher> Clone for PokeApi<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            settings: self.settings.clone(),
        }
    }
}

impl<F: HttpFetcher> PokeApi<F> {
    /// Creates a client that fetches through the given port.
    pub const fn new(fetcher: Arc<F>, settings: ApiSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Base address every URL is built from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// URL of a single entity, e.g. `{base}/pokemon/25`.
    #[must_use]
    pub fn entity_url(&self, kind: ResourceKind, key: &ResourceKey) -> String {
        format!("{}/{}/{}", self.base_url(), kind.path(), key)
    }

    /// URL of a list endpoint, with `offset`/`limit` when options are given.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be encoded.
    pub fn list_url(
        &self,
        kind: ResourceKind,
        options: Option<PageOptions>,
    ) -> ApplicationResult<String> {
        let base = format!("{}/{}", self.base_url(), kind.path());
        match options {
            Some(options) => Ok(format!("{base}?{}", serde_urlencoded::to_string(options)?)),
            None => Ok(base),
        }
    }

    /// Fetches any URL and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ApplicationResult<T> {
        self.fetch_json(url, url.to_string()).await
    }

    /// Retrieves a creature by id or name.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn pokemon(&self, key: impl Into<ResourceKey>) -> ApplicationResult<Pokemon> {
        self.entity(ResourceKind::Pokemon, key.into()).await
    }

    /// Retrieves a type by id or name.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn pokemon_type(
        &self,
        key: impl Into<ResourceKey>,
    ) -> ApplicationResult<PokemonType> {
        self.entity(ResourceKind::Type, key.into()).await
    }

    /// Retrieves species details by id or name.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn species(&self, key: impl Into<ResourceKey>) -> ApplicationResult<Species> {
        self.entity(ResourceKind::Species, key.into()).await
    }

    /// Retrieves an ability by id or name.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn ability(&self, key: impl Into<ResourceKey>) -> ApplicationResult<Ability> {
        self.entity(ResourceKind::Ability, key.into()).await
    }

    /// Fetches a page of creature references.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn pokemon_list(&self, options: PageOptions) -> ApplicationResult<Page> {
        self.list(ResourceKind::Pokemon, Some(options)).await
    }

    /// Fetches a page of species references.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn species_list(&self, options: PageOptions) -> ApplicationResult<Page> {
        self.list(ResourceKind::Species, Some(options)).await
    }

    /// Fetches a page of ability references.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn abilities(&self, options: PageOptions) -> ApplicationResult<Page> {
        self.list(ResourceKind::Ability, Some(options)).await
    }

    /// Fetches the type list with the API's default window.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn types(&self) -> ApplicationResult<Page> {
        self.list(ResourceKind::Type, None).await
    }

    /// Fetches the generation list with the API's default window.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn generations(&self) -> ApplicationResult<Page> {
        self.list(ResourceKind::Generation, None).await
    }

    async fn entity<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        key: ResourceKey,
    ) -> ApplicationResult<T> {
        let url = self.entity_url(kind, &key);
        self.fetch_json(&url, format!("{kind} with ID {key}")).await
    }

    async fn list(
        &self,
        kind: ResourceKind,
        options: Option<PageOptions>,
    ) -> ApplicationResult<Page> {
        let url = self.list_url(kind, options)?;
        self.fetch_json(&url, format!("{kind} list")).await
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        target: String,
    ) -> ApplicationResult<T> {
        debug!(url = %url, "GET");
        let response = match self.fetcher.get(url).await {
            Ok(response) => response,
            Err(source) => return Err(ApplicationError::Transport { target, source }),
        };
        debug!(
            url = %url,
            status = response.status,
            bytes = response.body.len(),
            "response"
        );

        if !response.is_success() {
            return Err(ApplicationError::Status {
                target,
                status: response.status,
                reason: response.reason,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|source| ApplicationError::Decode { target, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ports::{FetchError, RawResponse};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::future::{Future, ready};
    use std::sync::Mutex;

    /// Fetcher answering from a fixed routing table.
    #[derive(Default)]
    struct StubFetcher {
        routes: HashMap<String, Result<RawResponse, FetchError>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn route(mut self, url: &str, response: Result<RawResponse, FetchError>) -> Self {
            self.routes.insert(url.to_string(), response);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl HttpFetcher for StubFetcher {
        fn get(
            &self,
            url: &str,
        ) -> impl Future<Output = Result<RawResponse, FetchError>> + Send {
            self.calls.lock().unwrap().push(url.to_string());
            let response = self
                .routes
                .get(url)
                .cloned()
                .unwrap_or_else(|| Ok(RawResponse::new(404, "Not Found", "Not Found")));
            ready(response)
        }
    }

    const BASE: &str = "http://api.test/v2";

    fn api(fetcher: StubFetcher) -> (PokeApi<StubFetcher>, Arc<StubFetcher>) {
        let fetcher = Arc::new(fetcher);
        let settings = ApiSettings::new(BASE).unwrap();
        (PokeApi::new(Arc::clone(&fetcher), settings), fetcher)
    }

    fn ok(body: &str) -> Result<RawResponse, FetchError> {
        Ok(RawResponse::new(200, "OK", body))
    }

    #[test]
    fn test_entity_url() {
        let (api, _) = api(StubFetcher::default());
        assert_eq!(
            api.entity_url(ResourceKind::Pokemon, &ResourceKey::from(25)),
            "http://api.test/v2/pokemon/25"
        );
        assert_eq!(
            api.entity_url(ResourceKind::Species, &ResourceKey::from("bulbasaur")),
            "http://api.test/v2/pokemon-species/bulbasaur"
        );
    }

    #[test]
    fn test_list_url() {
        let (api, _) = api(StubFetcher::default());
        assert_eq!(
            api.list_url(ResourceKind::Ability, Some(PageOptions::default()))
                .unwrap(),
            "http://api.test/v2/ability?offset=0&limit=20"
        );
        assert_eq!(
            api.list_url(ResourceKind::Type, None).unwrap(),
            "http://api.test/v2/type"
        );
    }

    #[tokio::test]
    async fn test_pokemon_by_id() {
        let stub = StubFetcher::default().route(
            "http://api.test/v2/pokemon/25",
            ok(include_str!("../../domain/tests/fixtures/pikachu.json")),
        );
        let (api, fetcher) = api(stub);

        let pikachu = api.pokemon(25).await.unwrap();

        assert_eq!(pikachu.name, "pikachu");
        assert_eq!(fetcher.calls(), vec!["http://api.test/v2/pokemon/25"]);
    }

    #[tokio::test]
    async fn test_list_uses_default_window() {
        let stub = StubFetcher::default().route(
            "http://api.test/v2/pokemon-species?offset=0&limit=20",
            ok(include_str!("../../domain/tests/fixtures/species_list.json")),
        );
        let (api, _) = api(stub);

        let page = api.species_list(PageOptions::default()).await.unwrap();
        assert_eq!(page.first_name(), Some("bulbasaur"));
    }

    #[tokio::test]
    async fn test_status_failure_names_key_and_status_text() {
        let (api, _) = api(StubFetcher::default());

        let err = api.pokemon("missingno").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "failed to fetch Pokémon with ID missingno: Not Found"
        );
    }

    #[tokio::test]
    async fn test_list_failures_name_their_own_resource() {
        let (api, _) = api(StubFetcher::default());

        let species = api.species_list(PageOptions::default()).await.unwrap_err();
        let abilities = api.abilities(PageOptions::default()).await.unwrap_err();
        let generations = api.generations().await.unwrap_err();

        assert_eq!(
            species.to_string(),
            "failed to fetch Pokémon species list: Not Found"
        );
        assert_eq!(abilities.to_string(), "failed to fetch ability list: Not Found");
        assert_eq!(
            generations.to_string(),
            "failed to fetch Pokémon generation list: Not Found"
        );
    }

    #[tokio::test]
    async fn test_raw_get_failure_names_url() {
        let stub = StubFetcher::default().route(
            "http://api.test/v2/type/3",
            Ok(RawResponse::new(500, "Internal Server Error", "")),
        );
        let (api, _) = api(stub);

        let err = api
            .get::<PokemonType>("http://api.test/v2/type/3")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to fetch http://api.test/v2/type/3: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let stub = StubFetcher::default().route("http://api.test/v2/type", ok("not json"));
        let (api, _) = api(stub);

        let err = api.types().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Decode { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let stub = StubFetcher::default().route(
            "http://api.test/v2/ability/1",
            Err(FetchError::ConnectionFailed("refused".to_string())),
        );
        let (api, _) = api(stub);

        let err = api.ability(1).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Transport { .. }));
        assert_eq!(
            err.to_string(),
            "failed to fetch ability with ID 1: connection failed: refused"
        );
    }

    #[tokio::test]
    async fn test_each_call_is_one_round_trip() {
        let stub = StubFetcher::default().route(
            "http://api.test/v2/type/3",
            ok(include_str!("../../domain/tests/fixtures/type_flying.json")),
        );
        let (api, fetcher) = api(stub);

        api.pokemon_type(3).await.unwrap();
        api.pokemon_type(3).await.unwrap();

        assert_eq!(fetcher.calls().len(), 2);
    }
}
