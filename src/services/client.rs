use chrono::NaiveDateTime;

use crate::derivation::{search_and_filter, sort_records};
use crate::domain::client::Client;
use crate::domain::types::ClientId;
use crate::dto::client::{ClientListData, ClientListQuery, ClientSummary};
use crate::forms::client::{AddClientForm, EditClientForm};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the searched, filtered and sorted client list.
pub fn load_client_list<R>(
    repo: &R,
    query: &ClientListQuery,
    now: NaiveDateTime,
) -> ServiceResult<ClientListData>
where
    R: ClientReader + ?Sized,
{
    let snapshot = repo.list_clients().map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;

    let matching = search_and_filter(&snapshot, query.search_text(), query.status, now);
    let sorted = sort_records(&matching, query.sort);

    log::debug!(
        "Client list: {} of {} clients match (status={}, sort={})",
        sorted.len(),
        snapshot.len(),
        query.status,
        query.sort
    );

    Ok(ClientListData {
        total: sorted.len(),
        clients: sorted.iter().map(|c| ClientSummary::new(c, now)).collect(),
        filtered: query.is_filtered(),
    })
}

/// Fetches a single client by its string identifier.
pub fn get_client<R>(repo: &R, client_id: &str) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let id: ClientId = client_id.parse()?;
    repo.get_client_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates the add-client form and persists a new client record.
pub fn add_client<R>(repo: &R, form: AddClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let new_client = form.into_new_client().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        err
    })?;

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err
    })?;

    log::info!("Client added: {}", client.id);
    Ok(client)
}

/// Validates the edit form and merges it into the stored client.
pub fn update_client<R>(repo: &R, client_id: &str, form: EditClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let id: ClientId = client_id.parse()?;
    let updates = form.into_update().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        err
    })?;

    let client = repo.update_client(id, &updates).map_err(|err| {
        log::error!("Failed to update client {id}: {err}");
        err
    })?;

    log::info!("Client updated: {id}");
    Ok(client)
}

/// Removes the client with the given identifier.
pub fn delete_client<R>(repo: &R, client_id: &str) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let id: ClientId = client_id.parse()?;
    repo.delete_client(id).map_err(|err| {
        log::error!("Failed to delete client {id}: {err}");
        err
    })?;

    log::info!("Client deleted: {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::derivation::{SortKey, StatusFilter};
    use crate::domain::status::DateStatus;
    use crate::domain::types::ClientName;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 26)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap()
    }

    fn stored(name: &str, amount: &str, next_contact_in_days: Option<i64>) -> Client {
        Client {
            id: ClientId::new(),
            client_name: ClientName::new(name).unwrap(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone_number: "(555) 123-4567".to_string(),
            billing_address: "Somewhere".to_string(),
            test_ad_call_date: None,
            reviews_ordered: Some(1),
            amount_paid_on_call: Some(amount.to_string()),
            next_month_agreed_payment: None,
            date_of_next_contact: next_contact_in_days.map(|d| now() + TimeDelta::days(d)),
            date_commissions_due: None,
            notes: None,
        }
    }

    #[test]
    fn list_searches_filters_and_sorts() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients().times(1).returning(|| {
            Ok(vec![
                stored("Acme", "100.00", Some(-2)),
                stored("Globex", "900.00", Some(-1)),
                stored("Initech", "500.00", Some(12)),
            ])
        });

        let query = ClientListQuery {
            search: None,
            status: StatusFilter::Overdue,
            sort: SortKey::Amount,
        };
        let data = load_client_list(&repo, &query, now()).unwrap();

        let names: Vec<_> = data.clients.iter().map(|c| c.client_name.as_str()).collect();
        assert_eq!(names, vec!["Globex", "Acme"]);
        assert_eq!(data.total, 2);
        assert!(data.filtered);
        assert_eq!(data.clients[0].next_contact_status, DateStatus::Overdue);
        assert_eq!(data.clients[0].next_contact_badge, "destructive");
        assert_eq!(data.clients[0].commission_status, DateStatus::Neutral);
        assert_eq!(data.clients[0].commission_badge, "secondary");
        assert_eq!(data.clients[0].amount_paid, "$900.00");
    }

    #[test]
    fn search_text_is_matched_verbatim() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients().returning(|| {
            Ok(vec![
                stored("Acme Corporation", "1", None),
                stored("Tech Solutions Inc", "1", Some(3)),
            ])
        });

        let leading_space = ClientListQuery {
            search: Some(" acme".to_string()),
            ..ClientListQuery::default()
        };
        let data = load_client_list(&repo, &leading_space, now()).unwrap();
        assert_eq!(data.total, 0);
        assert!(data.filtered);

        let inner_space = ClientListQuery {
            search: Some("tech solutions".to_string()),
            ..ClientListQuery::default()
        };
        let data = load_client_list(&repo, &inner_space, now()).unwrap();
        assert_eq!(data.total, 1);
        assert_eq!(data.clients[0].next_contact_badge, "default");
    }

    #[test]
    fn empty_search_is_not_a_filter() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .returning(|| Ok(vec![stored("Acme", "1", None)]));

        let query = ClientListQuery {
            search: Some(String::new()),
            ..ClientListQuery::default()
        };
        let data = load_client_list(&repo, &query, now()).unwrap();

        assert_eq!(data.total, 1);
        assert!(!data.filtered);
    }

    #[test]
    fn add_client_validates_before_touching_store() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().never();

        let form: AddClientForm = serde_json::from_value(json!({
            "client_name": "Acme",
            "email": "contact@acme.com",
            "phone_number": "(555) 123-4567",
            "billing_address": "123 Business St",
            "amount_paid_on_call": "12.345",
        }))
        .unwrap();

        let err = add_client(&repo, form).unwrap_err();

        match err {
            ServiceError::Form(form_err) => {
                assert_eq!(form_err.fields(), vec!["amount_paid_on_call"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn add_client_persists_validated_payload() {
        let mut repo = MockRepository::new();
        repo.expect_create_client()
            .times(1)
            .withf(|new_client| {
                new_client.client_name.as_str() == "Acme"
                    && new_client.amount_paid_on_call.as_str() == "2500.00"
            })
            .returning(|_| Ok(stored("Acme", "2500.00", None)));

        let form: AddClientForm = serde_json::from_value(json!({
            "client_name": "Acme",
            "email": "contact@acme.com",
            "phone_number": "(555) 123-4567",
            "billing_address": "123 Business St",
            "amount_paid_on_call": "2500",
        }))
        .unwrap();

        let client = add_client(&repo, form).unwrap();
        assert_eq!(client.client_name.as_str(), "Acme");
    }

    #[test]
    fn update_unknown_client_is_not_found() {
        let id = ClientId::new();
        let mut repo = MockRepository::new();
        repo.expect_update_client()
            .with(eq(id), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let form = EditClientForm {
            reviews_ordered: Some(3),
            ..EditClientForm::default()
        };

        let err = update_client(&repo, &id.to_string(), form).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn malformed_id_is_rejected_without_store_access() {
        let mut repo = MockRepository::new();
        repo.expect_delete_client().never();

        let err = delete_client(&repo, "not-an-id").unwrap_err();
        assert!(matches!(err, ServiceError::TypeConstraint(_)));
    }

    #[test]
    fn delete_forwards_parsed_id() {
        let id = ClientId::new();
        let mut repo = MockRepository::new();
        repo.expect_delete_client()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        delete_client(&repo, &id.to_string()).unwrap();
    }

    #[test]
    fn get_missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));

        let err = get_client(&repo, &ClientId::new().to_string()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }
}
