use contracts::domain::a003_provider::aggregate::{ProviderField, ProviderForm};

use crate::shared::actions::{ActionOutcome, INVOICES_PATH};
use crate::shared::revalidate::Revalidator;
use crate::shared::upstream::dto::ProveedorInputDto;
use crate::shared::upstream::ProvidersApi;

/// Поставщики для формы счёта; при ошибке upstream - пустой список
pub async fn fetch_providers(api: &dyn ProvidersApi) -> Vec<ProviderField> {
    match api.get_providers().await {
        Ok(providers) => providers.iter().map(|p| p.to_provider_field()).collect(),
        Err(e) => {
            tracing::error!("Error fetching providers: {}", e);
            Vec::new()
        }
    }
}

/// Поставщик нужен для счетов, поэтому инвалидируется список счетов
pub async fn create_provider(
    api: &dyn ProvidersApi,
    revalidator: &Revalidator,
    form: &ProviderForm,
) -> ActionOutcome {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::invalid(
                errors,
                "Campos faltantes. No se pudo crear el proveedor.",
            )
        }
    };

    if let Err(e) = api.create_provider(&ProveedorInputDto::from(input)).await {
        tracing::error!("Error creating provider: {}", e);
        return ActionOutcome::failed("Error: No se pudo crear el proveedor.");
    }

    revalidator.revalidate(INVOICES_PATH);
    ActionOutcome::success(INVOICES_PATH)
}
