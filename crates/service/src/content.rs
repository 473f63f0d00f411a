//! Typed content operations over the document collections.
//!
//! Every read rewrites the store's native key to a plain string `id` before
//! handing documents to callers; adapter errors propagate untouched.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use models::{Inquiry, Service, Stored, TeamMember};

use crate::errors::ServiceError;
use crate::storage::{Document, Store, NATIVE_ID};

/// Inquiry listing page size: default and inclusive maximum.
pub const DEFAULT_INQUIRY_LIMIT: i64 = 20;
pub const MAX_INQUIRY_LIMIT: i64 = 100;

fn to_document<T: Serialize>(value: &T) -> Result<Document, ServiceError> {
    match serde_json::to_value(value).map_err(|e| ServiceError::Write(e.to_string()))? {
        Value::Object(map) => Ok(map),
        _ => Err(ServiceError::Write("document kinds must serialize to objects".into())),
    }
}

fn into_stored<T: DeserializeOwned>(mut doc: Document) -> Result<Stored<T>, ServiceError> {
    let id = match doc.remove(NATIVE_ID) {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => return Err(ServiceError::Read("document missing native id".into())),
    };
    let doc = serde_json::from_value(Value::Object(doc))
        .map_err(|e| ServiceError::Read(e.to_string()))?;
    Ok(Stored { id, doc })
}

/// List every service, in the store's natural order.
pub async fn list_services(store: &Store) -> Result<Vec<Stored<Service>>, ServiceError> {
    let docs = store.find(Service::COLLECTION, &Document::new(), None).await?;
    docs.into_iter().map(into_stored).collect()
}

/// Validate and store a service.
pub async fn create_service(store: &Store, input: Service) -> Result<String, ServiceError> {
    input.validate()?;
    store.insert(Service::COLLECTION, to_document(&input)?).await
}

/// List team members, optionally restricted to one department. An empty
/// filter value means no filter at all.
pub async fn list_team(
    store: &Store,
    team: Option<&str>,
) -> Result<Vec<Stored<TeamMember>>, ServiceError> {
    let mut filter = Document::new();
    if let Some(t) = team {
        if !t.is_empty() {
            filter.insert("team".to_string(), Value::String(t.to_string()));
        }
    }
    let docs = store.find(TeamMember::COLLECTION, &filter, None).await?;
    docs.into_iter().map(into_stored).collect()
}

/// Validate and store a team member.
pub async fn create_team_member(store: &Store, input: TeamMember) -> Result<String, ServiceError> {
    input.validate()?;
    store.insert(TeamMember::COLLECTION, to_document(&input)?).await
}

/// Validate and store a client inquiry; the caller gets only the new id.
pub async fn create_inquiry(store: &Store, input: Inquiry) -> Result<String, ServiceError> {
    input.validate()?;
    store.insert(Inquiry::COLLECTION, to_document(&input)?).await
}

/// List inquiries, newest-submitted last. `limit` defaults to 20 and is
/// clamped to [1, 100] before reaching the store. No access restriction is
/// applied at this layer.
pub async fn list_inquiries(
    store: &Store,
    limit: Option<i64>,
) -> Result<Vec<Stored<Inquiry>>, ServiceError> {
    let limit = limit.unwrap_or(DEFAULT_INQUIRY_LIMIT).clamp(1, MAX_INQUIRY_LIMIT) as usize;
    let docs = store.find(Inquiry::COLLECTION, &Document::new(), Some(limit)).await?;
    docs.into_iter().map(into_stored).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json_file_store::JsonFileStore;
    use uuid::Uuid;

    async fn test_store() -> Store {
        let tmp = std::env::temp_dir().join(format!("eventco_content_{}.json", Uuid::new_v4()));
        Store::connected(JsonFileStore::new(tmp).await.expect("store init"))
    }

    fn service(title: &str, category: &str) -> Service {
        Service {
            title: title.into(),
            description: format!("{title} description"),
            category: category.into(),
            icon: Some("sparkles".into()),
            featured: true,
        }
    }

    fn member(name: &str, team: &str) -> TeamMember {
        TeamMember {
            name: name.into(),
            role: "Coordinator".into(),
            team: team.into(),
            bio: None,
            avatar_url: None,
        }
    }

    fn inquiry(name: &str) -> Inquiry {
        Inquiry {
            name: name.into(),
            email: "jane@example.com".into(),
            phone: None,
            service: Some("Wedding Planning".into()),
            event_date: None,
            budget_range: None,
            message: None,
        }
    }

    #[tokio::test]
    async fn service_round_trip_exposes_string_id_only() -> Result<(), anyhow::Error> {
        let store = test_store().await;
        let input = service("Wedding Planning", "Events");
        let id = create_service(&store, input.clone()).await?;
        assert!(!id.is_empty());

        let listed = list_services(&store).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].doc, input);

        // the native key must not leak through serialization
        let json = serde_json::to_value(&listed[0])?;
        assert!(json.get(NATIVE_ID).is_none());
        assert!(json.get("id").map(|v| v.is_string()).unwrap_or(false));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_service_is_rejected_before_storage() -> Result<(), anyhow::Error> {
        let store = test_store().await;
        let bad = service("", "Events");
        assert!(matches!(
            create_service(&store, bad).await,
            Err(ServiceError::Model(_))
        ));
        assert!(list_services(&store).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn team_filter_partitions_the_roster() -> Result<(), anyhow::Error> {
        let store = test_store().await;
        for (name, team) in [("Ada", "Media"), ("Ben", "Events"), ("Cleo", "Media")] {
            create_team_member(&store, member(name, team)).await?;
        }

        let media = list_team(&store, Some("Media")).await?;
        assert_eq!(media.len(), 2);
        assert!(media.iter().all(|m| m.doc.team == "Media"));

        let events = list_team(&store, Some("Events")).await?;
        assert_eq!(events.len(), 1);

        // no filter (or an empty one) returns the union of all departments
        let all = list_team(&store, None).await?;
        assert_eq!(all.len(), media.len() + events.len());
        let blank = list_team(&store, Some("")).await?;
        assert_eq!(blank.len(), all.len());

        let unknown = list_team(&store, Some("Catering")).await?;
        assert!(unknown.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn inquiry_limit_is_clamped() -> Result<(), anyhow::Error> {
        let store = test_store().await;
        for i in 0..5 {
            create_inquiry(&store, inquiry(&format!("Guest {i}"))).await?;
        }

        assert_eq!(list_inquiries(&store, None).await?.len(), 5);
        assert_eq!(list_inquiries(&store, Some(2)).await?.len(), 2);
        // 0 and negative clamp up to 1, oversized clamps down to 100
        assert_eq!(list_inquiries(&store, Some(0)).await?.len(), 1);
        assert_eq!(list_inquiries(&store, Some(-7)).await?.len(), 1);
        assert_eq!(list_inquiries(&store, Some(250)).await?.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_email_never_reaches_the_store() -> Result<(), anyhow::Error> {
        let store = test_store().await;
        let mut bad = inquiry("Jane Doe");
        bad.email = "jane-at-example.com".into();
        assert!(matches!(
            create_inquiry(&store, bad).await,
            Err(ServiceError::Model(_))
        ));
        assert!(list_inquiries(&store, None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn disconnected_store_propagates_unavailable() {
        let store = Store::disconnected();
        assert!(matches!(
            list_services(&store).await,
            Err(ServiceError::Unavailable)
        ));
        assert!(matches!(
            create_inquiry(&store, inquiry("Jane Doe")).await,
            Err(ServiceError::Unavailable)
        ));
    }
}
