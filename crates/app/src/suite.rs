//! The fixed suite run against the live API.
//!
//! Several cases cross-check a typed accessor against a raw `get` of the
//! same URL; both requests are issued concurrently and joined before the
//! case resolves.

use std::future::Future;

use pokedex_application::{HttpFetcher, PokeApi};
use pokedex_domain::{
    Page, PageOptions, Pokemon, PokemonType, ResourceKey, ResourceKind, Species,
};
use pokedex_infrastructure::{TestCase, TestSuite};

const PIKACHU: u32 = 25;
const FLYING: u32 = 3;
const VENUSAUR: u32 = 3;

/// Builds the suite, in execution order.
pub fn build<F: HttpFetcher + 'static>(api: &PokeApi<F>) -> TestSuite {
    TestSuite::new("pokeapi")
        .with_case(api_case(api, "should fetch Pikachu", fetch_pikachu))
        .with_case(api_case(api, "should match with API result", pokemon_matches_raw))
        .with_case(api_case(
            api,
            "first pokemon on the list is bulbasaur",
            first_pokemon_is_bulbasaur,
        ))
        .with_case(api_case(
            api,
            "should match Pokémon list with API response",
            pokemon_list_matches_raw,
        ))
        .with_case(api_case(
            api,
            "first generation on the list is generation-i",
            first_generation_is_gen_one,
        ))
        .with_case(api_case(api, "first type on the list is normal", first_type_is_normal))
        .with_case(api_case(api, "types first move should match", type_moves_match_raw))
        .with_case(api_case(
            api,
            "fetch species should match base_happiness",
            species_matches_raw,
        ))
        .with_case(api_case(
            api,
            "first ability on the list is stench",
            first_ability_is_stench,
        ))
        .with_case(api_case(api, "should fetch ability by name", ability_by_name))
}

fn api_case<F, C, Fut>(api: &PokeApi<F>, label: &str, check: C) -> TestCase
where
    F: HttpFetcher + 'static,
    C: FnOnce(PokeApi<F>) -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<bool>> + Send + 'static,
{
    let api = api.clone();
    TestCase::new(label, move || check(api))
}

fn first_ten() -> PageOptions {
    PageOptions::default().with_limit(10)
}

async fn fetch_pikachu<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let pikachu = api.pokemon(PIKACHU).await?;
    Ok(pikachu.name.to_lowercase() == "pikachu")
}

async fn pokemon_matches_raw<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let url = api.entity_url(ResourceKind::Pokemon, &ResourceKey::from(PIKACHU));
    let (typed, raw) = tokio::try_join!(api.pokemon(PIKACHU), api.get::<Pokemon>(&url))?;
    Ok(typed.name == raw.name)
}

async fn first_pokemon_is_bulbasaur<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let page = api.pokemon_list(first_ten()).await?;
    Ok(page.first_name() == Some("bulbasaur"))
}

async fn pokemon_list_matches_raw<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let url = api.list_url(ResourceKind::Pokemon, Some(first_ten()))?;
    let (typed, raw) =
        tokio::try_join!(api.pokemon_list(first_ten()), api.get::<Page>(&url))?;
    Ok(typed.first_name().is_some() && typed.first_name() == raw.first_name())
}

async fn first_generation_is_gen_one<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let page = api.generations().await?;
    Ok(page.first_name() == Some("generation-i"))
}

async fn first_type_is_normal<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let page = api.types().await?;
    Ok(page.first_name() == Some("normal"))
}

async fn type_moves_match_raw<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let url = api.entity_url(ResourceKind::Type, &ResourceKey::from(FLYING));
    let (typed, raw) =
        tokio::try_join!(api.pokemon_type(FLYING), api.get::<PokemonType>(&url))?;
    Ok(typed.first_move().is_some() && typed.first_move() == raw.first_move())
}

async fn species_matches_raw<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let url = api.entity_url(ResourceKind::Species, &ResourceKey::from(VENUSAUR));
    let (typed, raw) = tokio::try_join!(api.species(VENUSAUR), api.get::<Species>(&url))?;
    Ok(typed.base_happiness == raw.base_happiness)
}

async fn first_ability_is_stench<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let page = api.abilities(first_ten()).await?;
    Ok(page.first_name() == Some("stench"))
}

async fn ability_by_name<F: HttpFetcher>(api: PokeApi<F>) -> anyhow::Result<bool> {
    let stench = api.ability("stench").await?;
    Ok(stench.id == 1)
}
