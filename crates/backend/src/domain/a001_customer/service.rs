use contracts::domain::a001_customer::aggregate::{
    Customer, CustomerField, CustomerForm, CustomersTableRow,
};
use contracts::shared::action_state::ActionState;
use contracts::shared::validation::parse_id;

use crate::shared::actions::{ActionOutcome, CUSTOMERS_PATH};
use crate::shared::revalidate::Revalidator;
use crate::shared::search::matches_query;
use crate::shared::upstream::dto::ClienteInputDto;
use crate::shared::upstream::CustomersApi;

const NOT_FOUND: &str = "El cliente seleccionado no existe.";

/// Клиенты для выпадающих списков; при ошибке upstream - пустой список
pub async fn fetch_customers(api: &dyn CustomersApi) -> Vec<CustomerField> {
    match api.get_customers().await {
        Ok(customers) => customers.iter().map(|c| c.to_customer_field()).collect(),
        Err(e) => {
            tracing::error!("Error fetching customers: {}", e);
            Vec::new()
        }
    }
}

/// Клиент для формы редактирования; `None`, если id некорректен или клиента нет
pub async fn fetch_customer_by_id(api: &dyn CustomersApi, id: &str) -> Option<Customer> {
    let id = parse_id(id)?;
    match api.get_customer(id).await {
        Ok(customer) => Some(customer.to_customer()),
        Err(e) => {
            tracing::error!("Error fetching customer {}: {}", id, e);
            None
        }
    }
}

/// Таблица клиентов со статистикой по заказам.
///
/// Если не удалось получить заказы, у всех клиентов нулевая статистика;
/// если не удалось получить клиентов - пустой список.
pub async fn fetch_filtered_customers(
    api: &dyn CustomersApi,
    query: &str,
) -> Vec<CustomersTableRow> {
    let (customers, orders) = tokio::join!(api.get_customers(), api.get_orders());

    let customers = match customers {
        Ok(customers) => customers,
        Err(e) => {
            tracing::error!("Error fetching filtered customers: {}", e);
            return Vec::new();
        }
    };

    let orders = orders.unwrap_or_else(|e| {
        tracing::warn!("Orders unavailable, customers listed without stats: {}", e);
        Vec::new()
    });

    customers
        .iter()
        .filter(|c| matches_query(query, c.search_fields().as_slice()))
        .map(|c| c.to_table_row(&orders))
        .collect()
}

pub async fn create_customer(
    api: &dyn CustomersApi,
    revalidator: &Revalidator,
    form: &CustomerForm,
) -> ActionOutcome {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::invalid(errors, "Campos faltantes. No se pudo crear el cliente.")
        }
    };

    if let Err(e) = api.create_customer(&ClienteInputDto::from(input)).await {
        tracing::error!("Error creating customer: {}", e);
        return ActionOutcome::failed("Error: No se pudo crear el cliente.");
    }

    revalidator.revalidate(CUSTOMERS_PATH);
    ActionOutcome::success(CUSTOMERS_PATH)
}

pub async fn update_customer(
    api: &dyn CustomersApi,
    revalidator: &Revalidator,
    id: &str,
    form: &CustomerForm,
) -> ActionOutcome {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::invalid(
                errors,
                "Campos faltantes. No se pudo actualizar el cliente.",
            )
        }
    };
    let Some(id) = parse_id(id) else {
        return ActionOutcome::Rejected(ActionState::message(NOT_FOUND));
    };

    match api.update_customer(id, &ClienteInputDto::from(input)).await {
        Ok(_) => {
            revalidator.revalidate(CUSTOMERS_PATH);
            ActionOutcome::success(CUSTOMERS_PATH)
        }
        Err(e) if e.is_not_found() => ActionOutcome::Rejected(ActionState::message(NOT_FOUND)),
        Err(e) => {
            tracing::error!("Error updating customer {}: {}", id, e);
            ActionOutcome::failed("Error: No se pudo actualizar el cliente.")
        }
    }
}

pub async fn delete_customer(
    api: &dyn CustomersApi,
    revalidator: &Revalidator,
    id: &str,
) -> ActionOutcome {
    let Some(id) = parse_id(id) else {
        return ActionOutcome::Rejected(ActionState::message(NOT_FOUND));
    };

    match api.delete_customer(id).await {
        Ok(()) => {
            revalidator.revalidate(CUSTOMERS_PATH);
            ActionOutcome::success(CUSTOMERS_PATH)
        }
        Err(e) if e.is_not_found() => ActionOutcome::Rejected(ActionState::message(NOT_FOUND)),
        Err(e) => {
            tracing::error!("Error deleting customer {}: {}", id, e);
            ActionOutcome::failed("Error: No se pudo eliminar el cliente.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::upstream::testing::{cliente, pedido, FakeCustomersApi};

    fn api() -> FakeCustomersApi {
        FakeCustomersApi::with(
            vec![
                cliente(1, "Ana Pérez", "ana@example.com"),
                cliente(2, "Luis Gómez", "luis@acme.com"),
                cliente(3, "Marta Ruiz", "marta@acme.com"),
            ],
            vec![pedido(10, 1, 100.0), pedido(11, 1, 900.0), pedido(12, 2, 50.0)],
        )
    }

    #[tokio::test]
    async fn test_fetch_customers_options() {
        let customers = fetch_customers(&api()).await;
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[1], CustomerField { id: "2".into(), name: "Luis Gómez".into() });
    }

    #[tokio::test]
    async fn test_fetch_customers_degrades_to_empty() {
        let api = FakeCustomersApi {
            fail_customers: true,
            ..api()
        };
        assert!(fetch_customers(&api).await.is_empty());
        assert!(fetch_filtered_customers(&api, "").await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_customer_by_id() {
        let api = api();
        let customer = fetch_customer_by_id(&api, "3").await.unwrap();
        assert_eq!(customer.email, "marta@acme.com");
        assert!(fetch_customer_by_id(&api, "99").await.is_none());
        assert!(fetch_customer_by_id(&api, "abc").await.is_none());
    }

    #[tokio::test]
    async fn test_filtered_customers_with_stats() {
        let rows = fetch_filtered_customers(&api(), "ACME").await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Luis Gómez");
        assert_eq!(rows[0].total_invoices, 1);
        assert_eq!(rows[0].total_paid, "$35.00");
        assert_eq!(rows[0].total_pending, "$15.00");

        let all = fetch_filtered_customers(&api(), "").await;
        assert_eq!(all[0].total_invoices, 2);
        assert_eq!(all[0].total_paid, "$700.00");
        assert_eq!(all[0].total_pending, "$300.00");
    }

    #[tokio::test]
    async fn test_filtered_customers_fetches_in_parallel() {
        use crate::shared::upstream::transport::tests::spawn_upstream;
        use crate::shared::upstream::CustomersApiClient;
        use axum::routing::get;
        use axum::{Json, Router};
        use serde_json::json;
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::sync::Barrier;

        // оба ответа ждут друг друга: последовательные запросы упрутся в таймаут
        let barrier = Arc::new(Barrier::new(2));
        let (for_customers, for_orders) = (barrier.clone(), barrier);
        let router = Router::new()
            .route(
                "/api/clientes",
                get(move || async move {
                    for_customers.wait().await;
                    Json(json!([{"id": 1, "nombre": "Ana", "correo": "ana@example.com"}]))
                }),
            )
            .route(
                "/api/pedidos",
                get(move || async move {
                    for_orders.wait().await;
                    Json(json!([{"id": 5, "clienteId": 1, "productos": [], "total": 40.0}]))
                }),
            );
        let base_url = spawn_upstream(router).await;
        let api = CustomersApiClient::new(&base_url, Duration::from_secs(2)).unwrap();

        let rows = fetch_filtered_customers(&api, "").await;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_invoices, 1);
    }

    #[tokio::test]
    async fn test_orders_failure_gives_zero_stats() {
        let api = FakeCustomersApi {
            fail_orders: true,
            ..api()
        };
        let rows = fetch_filtered_customers(&api, "").await;
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.total_invoices, 0);
            assert_eq!(row.total_paid, "$0.00");
            assert_eq!(row.total_pending, "$0.00");
        }
    }

    #[tokio::test]
    async fn test_create_customer() {
        let api = api();
        let revalidator = Revalidator::new();
        let mut rx = revalidator.subscribe();

        let outcome = create_customer(
            &api,
            &revalidator,
            &CustomerForm::new("Nuevo", "nuevo@example.com"),
        )
        .await;

        assert_eq!(outcome, ActionOutcome::success(CUSTOMERS_PATH));
        assert_eq!(rx.try_recv().unwrap(), CUSTOMERS_PATH);
        let created = api.created_customers.lock().unwrap();
        assert_eq!(created[0].name, "Nuevo");
        assert_eq!(created[0].email, "nuevo@example.com");
    }

    #[tokio::test]
    async fn test_create_customer_invalid_makes_no_call() {
        let api = api();
        let outcome = create_customer(
            &api,
            &Revalidator::new(),
            &CustomerForm::new("", "no-es-correo"),
        )
        .await;

        let ActionOutcome::Invalid(state) = outcome else {
            panic!("expected validation failure");
        };
        assert_eq!(state.message, "Campos faltantes. No se pudo crear el cliente.");
        assert!(state.errors.contains("nombre"));
        assert!(state.errors.contains("correo"));
        assert!(api.created_customers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_customer_upstream_failure_hides_details() {
        let api = FakeCustomersApi {
            fail_writes: true,
            ..api()
        };
        let revalidator = Revalidator::new();
        let mut rx = revalidator.subscribe();

        let outcome =
            create_customer(&api, &revalidator, &CustomerForm::new("Ana", "ana@example.com")).await;

        assert_eq!(outcome, ActionOutcome::failed("Error: No se pudo crear el cliente."));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_update_customer() {
        let api = api();
        let outcome = update_customer(
            &api,
            &Revalidator::new(),
            "2",
            &CustomerForm::new("Luis G.", "luis@acme.com"),
        )
        .await;
        assert_eq!(outcome, ActionOutcome::success(CUSTOMERS_PATH));
        let updated = api.updated_customers.lock().unwrap();
        assert_eq!(updated[0].0, 2);
        assert_eq!(updated[0].1.name, "Luis G.");
    }

    #[tokio::test]
    async fn test_update_customer_validates_first() {
        let api = api();
        let outcome =
            update_customer(&api, &Revalidator::new(), "2", &CustomerForm::new("", "x")).await;
        assert!(matches!(outcome, ActionOutcome::Invalid(_)));
        assert!(api.updated_customers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_failures_are_reported() {
        let api = FakeCustomersApi {
            fail_writes: true,
            ..api()
        };
        let revalidator = Revalidator::new();

        let outcome = update_customer(
            &api,
            &revalidator,
            "1",
            &CustomerForm::new("Ana", "ana@example.com"),
        )
        .await;
        assert_eq!(outcome, ActionOutcome::failed("Error: No se pudo actualizar el cliente."));

        let outcome = delete_customer(&api, &revalidator, "1").await;
        assert_eq!(outcome, ActionOutcome::failed("Error: No se pudo eliminar el cliente."));
    }

    #[tokio::test]
    async fn test_delete_customer() {
        let api = api();
        let outcome = delete_customer(&api, &Revalidator::new(), "3").await;
        assert_eq!(outcome, ActionOutcome::success(CUSTOMERS_PATH));
        assert_eq!(*api.deleted_customers.lock().unwrap(), vec![3]);

        let outcome = delete_customer(&api, &Revalidator::new(), "tres").await;
        assert!(matches!(outcome, ActionOutcome::Rejected(_)));
    }
}
