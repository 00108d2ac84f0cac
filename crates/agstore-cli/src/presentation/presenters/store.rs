use agstore_types::Catalog;

use super::catalog::{present_agents, present_creators, present_slides};
use crate::presentation::view_models::{HeroViewModel, StoreScreenViewModel};

pub fn present_store_screen(catalog: &Catalog) -> StoreScreenViewModel {
    StoreScreenViewModel {
        hero: HeroViewModel {
            title: "Explore AI agents".to_string(),
            subtitle: "Find agents built by the community for writing, code, data and more"
                .to_string(),
            search_placeholder: "Search for tasks or agents".to_string(),
            agent_count: catalog.featured.len() + catalog.agents.len(),
            creator_count: catalog.creators.len(),
        },
        featured: present_slides(&catalog.featured),
        agents: present_agents(&catalog.agents, None).agents,
        creators: present_creators(&catalog.creators).creators,
    }
}
