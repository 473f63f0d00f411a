//! Idempotent bootstrap of default content.
//!
//! Each content collection is seeded independently and only when observed
//! empty. A failed emptiness probe counts as empty on purpose: bootstrap
//! stays usable across transient read errors, at the cost of a possible
//! duplicate sample set after recovery. The check-then-insert sequence is
//! likewise not atomic under concurrent seeding calls.

use serde::Serialize;
use tracing::{info, warn};

use models::{Service, TeamMember};

use crate::content;
use crate::storage::{Document, Store};

/// Count of documents actually inserted per collection by one seeding call.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SeedSummary {
    pub service: usize,
    pub teammember: usize,
}

fn default_services() -> Vec<Service> {
    let service = |title: &str, description: &str, category: &str, icon: &str| Service {
        title: title.into(),
        description: description.into(),
        category: category.into(),
        icon: Some(icon.into()),
        featured: false,
    };
    vec![
        service(
            "Wedding Planning",
            "End-to-end planning and day-of coordination for weddings.",
            "Events",
            "rings",
        ),
        service(
            "Corporate Events",
            "Conferences, product launches and company offsites.",
            "Events",
            "briefcase",
        ),
        service(
            "Media Production",
            "Photography, videography and live streaming coverage.",
            "Media",
            "camera",
        ),
        service(
            "Community Outreach",
            "Charity drives, fundraisers and neighborhood programs.",
            "Outreach",
            "heart",
        ),
    ]
}

fn default_team() -> Vec<TeamMember> {
    let member = |name: &str, role: &str, team: &str, bio: &str| TeamMember {
        name: name.into(),
        role: role.into(),
        team: team.into(),
        bio: Some(bio.into()),
        avatar_url: None,
    };
    vec![
        member(
            "Amara Osei",
            "Lead Planner",
            "Events",
            "Ten years of large-venue event direction.",
        ),
        member(
            "Lucas Romero",
            "Production Manager",
            "Media",
            "Runs the camera and streaming crews.",
        ),
        member(
            "Priya Nair",
            "Outreach Coordinator",
            "Outreach",
            "Connects the company with local partners.",
        ),
        member(
            "Tomás Silva",
            "Client Relations",
            "Events",
            "First point of contact for new inquiries.",
        ),
    ]
}

/// Whether a collection should receive seed data. A failed probe counts as
/// empty (fail-open, bootstrap only).
async fn should_seed(store: &Store, collection: &str) -> bool {
    match store.find(collection, &Document::new(), Some(1)).await {
        Ok(existing) => existing.is_empty(),
        Err(e) => {
            warn!(collection, error = %e, "emptiness probe failed; treating collection as empty");
            true
        }
    }
}

/// Seed both content collections, counting only documents actually inserted.
/// A populated collection is never re-seeded; repeated calls are safe.
pub async fn seed_defaults(store: &Store) -> SeedSummary {
    let mut summary = SeedSummary::default();

    if should_seed(store, Service::COLLECTION).await {
        for svc in default_services() {
            match content::create_service(store, svc).await {
                Ok(_) => summary.service += 1,
                Err(e) => warn!(error = %e, "seed insert failed for service"),
            }
        }
    }

    if should_seed(store, TeamMember::COLLECTION).await {
        for m in default_team() {
            match content::create_team_member(store, m).await {
                Ok(_) => summary.teammember += 1,
                Err(e) => warn!(error = %e, "seed insert failed for teammember"),
            }
        }
    }

    info!(
        service = summary.service,
        teammember = summary.teammember,
        "seeding pass complete"
    );
    summary
}
