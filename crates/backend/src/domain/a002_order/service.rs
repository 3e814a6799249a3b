use contracts::domain::a002_order::aggregate::{OrderForm, OrderOption};

use crate::shared::actions::{ActionOutcome, CUSTOMERS_PATH};
use crate::shared::revalidate::Revalidator;
use crate::shared::upstream::dto::PedidoInputDto;
use crate::shared::upstream::CustomersApi;

/// Заказы для выбора в форме счёта; при ошибке upstream - пустой список
pub async fn fetch_order_options(api: &dyn CustomersApi) -> Vec<OrderOption> {
    match api.get_orders().await {
        Ok(orders) => orders.iter().map(|o| o.to_order_option()).collect(),
        Err(e) => {
            tracing::error!("Error fetching orders: {}", e);
            Vec::new()
        }
    }
}

/// Создание заказа; список товаров приходит уже упорядоченным массивом
pub async fn create_order(
    api: &dyn CustomersApi,
    revalidator: &Revalidator,
    form: &OrderForm,
) -> ActionOutcome {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::invalid(errors, "Campos faltantes. No se pudo crear el pedido.")
        }
    };

    if let Err(e) = api.create_order(&PedidoInputDto::from(input)).await {
        tracing::error!("Error creating order: {}", e);
        return ActionOutcome::failed("Error al crear el pedido.");
    }

    revalidator.revalidate(CUSTOMERS_PATH);
    ActionOutcome::success(CUSTOMERS_PATH)
}
