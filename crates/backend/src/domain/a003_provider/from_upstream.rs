use contracts::domain::a003_provider::aggregate::ProviderField;
use contracts::shared::contact::ContactInput;

use crate::shared::upstream::dto::{ProveedorDto, ProveedorInputDto};

impl ProveedorDto {
    pub fn to_provider_field(&self) -> ProviderField {
        ProviderField {
            id: self.id.to_string(),
            name: self.name.clone(),
        }
    }
}

impl From<ContactInput> for ProveedorInputDto {
    fn from(input: ContactInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
        }
    }
}
