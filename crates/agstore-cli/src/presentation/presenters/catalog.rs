use agstore_types::{Creator, FeaturedAgent, StoreAgent};

use crate::presentation::view_models::{
    AgentRowViewModel, AgentTableViewModel, CreatorListViewModel, CreatorViewModel,
    FeaturedListViewModel, FeaturedSlideViewModel, RouteViewModel,
};

pub fn present_featured(
    featured: &[FeaturedAgent],
    current_index: Option<usize>,
) -> FeaturedListViewModel {
    FeaturedListViewModel {
        current_index,
        slides: present_slides(featured),
    }
}

pub fn present_slides(featured: &[FeaturedAgent]) -> Vec<FeaturedSlideViewModel> {
    featured
        .iter()
        .enumerate()
        .map(|(index, agent)| FeaturedSlideViewModel {
            index,
            slug: agent.slug.clone(),
            agent_name: agent.agent_name.clone(),
            agent_image: agent.agent_image.clone(),
            creator_name: agent.creator_name.clone(),
            creator_avatar: agent.creator_avatar.clone(),
            sub_heading: agent.sub_heading.clone(),
            description: agent.description.clone(),
            runs: agent.runs,
            rating: agent.rating(),
            path: agent.path(),
        })
        .collect()
}

pub fn present_agents(agents: &[StoreAgent], limit: Option<usize>) -> AgentTableViewModel {
    let rows = agents
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, agent)| AgentRowViewModel {
            rank: i + 1,
            slug: agent.slug.clone(),
            agent_name: agent.agent_name.clone(),
            creator: agent.creator.clone(),
            description: agent.description.clone(),
            runs: agent.runs,
            rating: agent.rating(),
            path: agent.path(),
        })
        .collect();

    AgentTableViewModel {
        agents: rows,
        total: agents.len(),
    }
}

pub fn present_creators(creators: &[Creator]) -> CreatorListViewModel {
    CreatorListViewModel {
        creators: creators
            .iter()
            .map(|c| CreatorViewModel {
                name: c.name.clone(),
                username: c.username.clone(),
                description: c.description.clone(),
                avatar_url: c.avatar_url.clone(),
                num_agents: c.num_agents,
            })
            .collect(),
    }
}

pub fn present_route(slug: &str, path: String) -> RouteViewModel {
    RouteViewModel {
        slug: slug.to_string(),
        path,
    }
}
