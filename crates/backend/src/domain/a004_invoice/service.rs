use contracts::domain::a004_invoice::aggregate::{
    CreateInvoiceForm, InvoiceForm, InvoicesPage, InvoicesTableRow, UpdateInvoiceForm,
};
use contracts::shared::action_state::ActionState;
use contracts::shared::validation::parse_id;

use super::error::FetchError;
use crate::shared::actions::{ActionOutcome, INVOICES_PATH};
use crate::shared::revalidate::Revalidator;
use crate::shared::search::{matches_query, paginate, total_pages};
use crate::shared::upstream::dto::{FacturaDto, FacturaInputDto, ProveedorDto};
use crate::shared::upstream::{CustomersApi, ProvidersApi, TransportError};

/// Счета и поставщики одним заходом, параллельно
async fn load(
    api: &dyn ProvidersApi,
) -> Result<(Vec<FacturaDto>, Vec<ProveedorDto>), TransportError> {
    tokio::try_join!(api.get_invoices(), api.get_providers())
}

/// Счета, подходящие под запрос, вместе с найденным поставщиком
fn filter<'a>(
    invoices: &'a [FacturaDto],
    providers: &'a [ProveedorDto],
    query: &str,
) -> Vec<(&'a FacturaDto, Option<&'a ProveedorDto>)> {
    invoices
        .iter()
        .map(|invoice| (invoice, invoice.find_provider(providers)))
        .filter(|(invoice, provider)| {
            matches_query(query, invoice.search_fields(*provider).as_slice())
        })
        .collect()
}

fn to_rows(matches: &[(&FacturaDto, Option<&ProveedorDto>)]) -> Vec<InvoicesTableRow> {
    matches
        .iter()
        .map(|(invoice, provider)| invoice.to_table_row(*provider))
        .collect()
}

/// Страница `page` отфильтрованных счетов (по 6 на страницу)
pub async fn fetch_filtered_invoices(
    api: &dyn ProvidersApi,
    query: &str,
    page: usize,
) -> Result<Vec<InvoicesTableRow>, FetchError> {
    let (invoices, providers) = load(api).await.map_err(|e| {
        tracing::error!("Error fetching invoices: {}", e);
        FetchError::Invoices(e)
    })?;
    let matches = filter(&invoices, &providers, query);
    Ok(to_rows(paginate(&matches, page)))
}

/// Количество страниц отфильтрованных счетов
pub async fn fetch_invoices_pages(api: &dyn ProvidersApi, query: &str) -> Result<usize, FetchError> {
    let (invoices, providers) = load(api).await.map_err(|e| {
        tracing::error!("Error fetching invoice pages: {}", e);
        FetchError::InvoicePages(e)
    })?;
    Ok(total_pages(filter(&invoices, &providers, query).len()))
}

/// Страница счетов, число страниц и признак наличия поставщиков; все три запроса параллельно
pub async fn fetch_invoices_page(
    api: &dyn ProvidersApi,
    query: &str,
    page: usize,
) -> Result<InvoicesPage, FetchError> {
    let providers = async {
        api.get_providers().await.map_err(|e| {
            tracing::error!("Error fetching providers for invoices: {}", e);
            FetchError::Invoices(e)
        })
    };
    let (invoices, total_pages, providers) = tokio::try_join!(
        fetch_filtered_invoices(api, query, page),
        fetch_invoices_pages(api, query),
        providers,
    )?;

    Ok(InvoicesPage {
        invoices,
        total_pages,
        has_providers: !providers.is_empty(),
    })
}

/// Счёт для формы редактирования; `None`, если id некорректен или счёта нет
pub async fn fetch_invoice_by_id(api: &dyn ProvidersApi, id: &str) -> Option<InvoiceForm> {
    let id = parse_id(id)?;
    match api.get_invoice(id).await {
        Ok(invoice) => Some(invoice.to_invoice_form()),
        Err(e) => {
            tracing::error!("Error fetching invoice {}: {}", id, e);
            None
        }
    }
}

/// Создание счёта: сначала читается заказ, его текущая сумма попадает в счёт
pub async fn create_invoice(
    customers_api: &dyn CustomersApi,
    providers_api: &dyn ProvidersApi,
    revalidator: &Revalidator,
    form: &CreateInvoiceForm,
) -> ActionOutcome {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::invalid(errors, "Campos faltantes. No se pudo crear la factura.")
        }
    };

    let order = match customers_api.get_order(input.order_id).await {
        Ok(order) => order,
        Err(e) if e.is_not_found() => {
            tracing::warn!("Order {} not found, invoice not created", input.order_id);
            return ActionOutcome::Rejected(ActionState::message(
                "El pedido seleccionado no existe.",
            ));
        }
        Err(e) => {
            tracing::error!("Error fetching order {}: {}", input.order_id, e);
            return ActionOutcome::failed("Error al crear la factura.");
        }
    };

    let dto = FacturaInputDto {
        provider_id: input.provider_id,
        orders: vec![order.to_order_reference()],
    };
    if let Err(e) = providers_api.create_invoice(&dto).await {
        tracing::error!("Error creating invoice: {}", e);
        return ActionOutcome::failed("Error al crear la factura.");
    }

    revalidator.revalidate(INVOICES_PATH);
    ActionOutcome::success(INVOICES_PATH)
}

/// Сервис поставщиков не умеет изменять счета: форма проверяется,
/// но изменение не выполняется.
pub async fn update_invoice(id: &str, form: &UpdateInvoiceForm) -> ActionOutcome {
    if let Err(errors) = form.validate() {
        return ActionOutcome::invalid(errors, "Missing Fields. Failed to Update Invoice.");
    }
    tracing::warn!("Invoice {} update requested, not supported upstream", id);
    ActionOutcome::Unsupported("El servicio de proveedores no permite editar facturas.".into())
}

pub async fn delete_invoice(id: &str) -> ActionOutcome {
    tracing::warn!("Invoice {} delete requested, not supported upstream", id);
    ActionOutcome::Unsupported("El servicio de proveedores no permite eliminar facturas.".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::upstream::testing::{
        cliente, factura, pedido, proveedor, FakeCustomersApi, FakeProvidersApi,
    };

    fn providers_api() -> FakeProvidersApi {
        let providers = vec![
            proveedor(1, "Distribuidora Norte", "norte@dist.com"),
            proveedor(2, "Papelería Sur", "sur@papel.com"),
        ];
        // 14 счетов: нечётные id у поставщика 1, чётные у поставщика 2
        let invoices = (1..=14)
            .map(|id| factura(id, if id % 2 == 1 { 1 } else { 2 }, id as f64 * 100.0))
            .collect();
        FakeProvidersApi::with(providers, invoices)
    }

    fn customers_api() -> FakeCustomersApi {
        FakeCustomersApi::with(
            vec![cliente(1, "Ana", "ana@example.com")],
            vec![pedido(15, 1, 80.5)],
        )
    }

    #[tokio::test]
    async fn test_pagination_over_all_invoices() {
        let api = providers_api();
        assert_eq!(fetch_invoices_pages(&api, "").await.unwrap(), 3);

        let page = fetch_filtered_invoices(&api, "", 3).await.unwrap();
        let ids: Vec<_> = page.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["13", "14"]);

        assert!(fetch_filtered_invoices(&api, "", 4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pagination_over_filtered_invoices() {
        let api = providers_api();
        // 7 счетов поставщика «Norte»
        assert_eq!(fetch_invoices_pages(&api, "NORTE").await.unwrap(), 2);

        let second = fetch_filtered_invoices(&api, "norte", 2).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, "13");
        assert_eq!(second[0].name, "Distribuidora Norte");
    }

    #[tokio::test]
    async fn test_search_by_amount_and_id() {
        let api = providers_api();
        let rows = fetch_filtered_invoices(&api, "1400", 1).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "14");
        assert_eq!(rows[0].formatted_amount, "$1,400.00");

        let rows = fetch_filtered_invoices(&api, "sur@", 1).await.unwrap();
        assert!(rows.iter().all(|r| r.provider_id == "2"));
    }

    #[tokio::test]
    async fn test_invoice_listing_propagates_failure() {
        let api = FakeProvidersApi {
            fail_invoices: true,
            ..providers_api()
        };
        let err = fetch_filtered_invoices(&api, "", 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch invoices.");

        let err = fetch_invoices_pages(&api, "").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch total number of invoices.");

        let providers_down = FakeProvidersApi {
            fail_providers: true,
            ..providers_api()
        };
        assert!(fetch_invoices_page(&providers_down, "", 1).await.is_err());
    }

    #[tokio::test]
    async fn test_invoices_page() {
        let page = fetch_invoices_page(&providers_api(), "", 0).await.unwrap();
        assert_eq!(page.invoices.len(), 6);
        assert_eq!(page.invoices[0].id, "1");
        assert_eq!(page.total_pages, 3);
        assert!(page.has_providers);

        let empty = FakeProvidersApi::default();
        let page = fetch_invoices_page(&empty, "", 1).await.unwrap();
        assert!(page.invoices.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_providers);
    }

    #[tokio::test]
    async fn test_invoices_page_matches_listing_and_pages() {
        let api = providers_api();
        let page = fetch_invoices_page(&api, "norte", 2).await.unwrap();

        assert_eq!(page.invoices, fetch_filtered_invoices(&api, "norte", 2).await.unwrap());
        assert_eq!(page.total_pages, fetch_invoices_pages(&api, "norte").await.unwrap());
        assert_eq!(page.invoices.len(), 1);
        assert_eq!(page.invoices[0].id, "13");

        let failing = FakeProvidersApi {
            fail_invoices: true,
            ..providers_api()
        };
        let err = fetch_invoices_page(&failing, "", 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch invoices.");
    }

    #[tokio::test]
    async fn test_fetch_invoice_by_id() {
        let api = providers_api();
        let form = fetch_invoice_by_id(&api, "4").await.unwrap();
        assert_eq!(form.amount, 400.0);
        assert_eq!(form.provider_id, "2");
        assert!(fetch_invoice_by_id(&api, "404").await.is_none());
        assert!(fetch_invoice_by_id(&api, "x").await.is_none());
    }

    #[tokio::test]
    async fn test_create_invoice_snapshots_order_total() {
        let customers = customers_api();
        let providers = providers_api();
        let revalidator = Revalidator::new();
        let mut rx = revalidator.subscribe();

        let outcome = create_invoice(
            &customers,
            &providers,
            &revalidator,
            &CreateInvoiceForm::new("2", "15"),
        )
        .await;

        assert_eq!(outcome, ActionOutcome::success(INVOICES_PATH));
        assert_eq!(rx.try_recv().unwrap(), INVOICES_PATH);
        let created = providers.created_invoices.lock().unwrap();
        assert_eq!(created[0].provider_id, 2);
        assert_eq!(created[0].orders[0].order_id, 15);
        assert_eq!(created[0].orders[0].total, 80.5);
    }

    #[tokio::test]
    async fn test_create_invoice_for_missing_order() {
        let customers = customers_api();
        let providers = providers_api();

        let outcome = create_invoice(
            &customers,
            &providers,
            &Revalidator::new(),
            &CreateInvoiceForm::new("1", "999"),
        )
        .await;

        assert_eq!(
            outcome,
            ActionOutcome::Rejected(ActionState::message("El pedido seleccionado no existe."))
        );
        assert_eq!(*customers.order_lookups.lock().unwrap(), vec![999]);
        assert!(providers.created_invoices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_invoice_validation_and_failures() {
        let customers = customers_api();
        let providers = providers_api();

        let outcome = create_invoice(
            &customers,
            &providers,
            &Revalidator::new(),
            &CreateInvoiceForm::default(),
        )
        .await;
        assert!(matches!(outcome, ActionOutcome::Invalid(_)));
        assert!(customers.order_lookups.lock().unwrap().is_empty());

        let failing = FakeProvidersApi {
            fail_writes: true,
            ..providers_api()
        };
        let outcome = create_invoice(
            &customers,
            &failing,
            &Revalidator::new(),
            &CreateInvoiceForm::new("1", "15"),
        )
        .await;
        assert_eq!(outcome, ActionOutcome::failed("Error al crear la factura."));
    }

    #[tokio::test]
    async fn test_update_and_delete_are_unsupported() {
        let invalid = update_invoice("1", &UpdateInvoiceForm::default()).await;
        let ActionOutcome::Invalid(state) = invalid else {
            panic!("expected validation failure");
        };
        assert!(state.errors.contains("amount"));

        let form = UpdateInvoiceForm {
            provider_id: Some("1".into()),
            amount: Some("120".into()),
            status: Some("paid".into()),
        };
        assert!(matches!(update_invoice("1", &form).await, ActionOutcome::Unsupported(_)));
        assert!(matches!(delete_invoice("1").await, ActionOutcome::Unsupported(_)));
    }
}
