use serde::{Deserialize, Serialize};

use crate::shared::action_state::FieldErrors;
use crate::shared::form_value::text_or_number;
use crate::shared::validation::{non_empty, parse_id, parse_positive};

/// Товар внутри заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

/// Заказ для выбора в форме счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOption {
    pub id: i64,
    pub total: f64,
}

/// Строка товара, как её прислала форма
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(rename = "nombre", default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(rename = "precio", default, deserialize_with = "text_or_number")]
    pub price: Option<String>,
}

impl ProductRow {
    pub fn new(name: &str, price: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
        }
    }

    /// Строка, где имя или цена не заполнены, считается пустой и пропускается
    fn is_blank(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
            || self.price.as_deref().map_or(true, str::is_empty)
    }
}

/// Форма создания заказа: клиент и упорядоченный список товаров
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderForm {
    #[serde(rename = "clienteId", default, deserialize_with = "text_or_number")]
    pub customer_id: Option<String>,
    #[serde(rename = "productos", default)]
    pub products: Vec<ProductRow>,
}

/// Проверенный заказ, готовый к отправке в upstream
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    pub customer_id: i64,
    pub products: Vec<Product>,
}

impl OrderForm {
    pub fn validate(&self) -> Result<OrderInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = non_empty(self.customer_id.as_deref()).and_then(parse_id);
        if customer_id.is_none() {
            errors.add("clienteId", "Por favor seleccione un cliente.");
        }

        let mut products = Vec::new();
        for row in self.products.iter().filter(|r| !r.is_blank()) {
            let name = non_empty(row.name.as_deref());
            let price = row.price.as_deref().and_then(parse_positive);
            if name.is_none() {
                errors.add("productos", "El nombre del producto es obligatorio");
            }
            if price.is_none() {
                errors.add("productos", "El precio debe ser mayor a 0");
            }
            if let (Some(name), Some(price)) = (name, price) {
                products.push(Product {
                    name: name.to_string(),
                    price,
                });
            }
        }

        if products.is_empty() && !errors.contains("productos") {
            errors.add("productos", "Debe agregar al menos un producto");
        }

        match customer_id {
            Some(customer_id) if errors.is_empty() => Ok(OrderInput {
                customer_id,
                products,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(customer: &str, rows: Vec<ProductRow>) -> OrderForm {
        OrderForm {
            customer_id: Some(customer.to_string()),
            products: rows,
        }
    }

    #[test]
    fn test_single_product() {
        let input = form("3", vec![ProductRow::new(" Mouse ", "25.50")])
            .validate()
            .unwrap();
        assert_eq!(input.customer_id, 3);
        assert_eq!(
            input.products,
            vec![Product {
                name: "Mouse".into(),
                price: 25.5
            }]
        );
    }

    #[test]
    fn test_no_products() {
        let errors = form("3", vec![]).validate().unwrap_err();
        assert_eq!(
            errors.get("productos").unwrap(),
            ["Debe agregar al menos un producto"]
        );
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let rows = vec![
            ProductRow::new("", ""),
            ProductRow::new("Teclado", ""),
            ProductRow::new("Monitor", "199"),
        ];
        let input = form("1", rows).validate().unwrap();
        assert_eq!(input.products.len(), 1);
        assert_eq!(input.products[0].name, "Monitor");
    }

    #[test]
    fn test_invalid_rows() {
        let rows = vec![ProductRow::new("   ", "10"), ProductRow::new("Cable", "0")];
        let errors = form("1", rows).validate().unwrap_err();
        let messages = errors.get("productos").unwrap();
        assert!(messages.contains(&"El nombre del producto es obligatorio".to_string()));
        assert!(messages.contains(&"El precio debe ser mayor a 0".to_string()));
        assert!(!messages.contains(&"Debe agregar al menos un producto".to_string()));
    }

    #[test]
    fn test_missing_customer() {
        let mut f = form("", vec![ProductRow::new("Mouse", "25.50")]);
        assert!(f.validate().unwrap_err().contains("clienteId"));
        f.customer_id = Some("abc".into());
        assert!(f.validate().unwrap_err().contains("clienteId"));
    }

    #[test]
    fn test_wire_format() {
        let f: OrderForm = serde_json::from_str(
            r#"{"clienteId": 7, "productos": [{"nombre": "Mouse", "precio": "25.50"}, {"nombre": "Pad", "precio": 4}]}"#,
        )
        .unwrap();
        let input = f.validate().unwrap();
        assert_eq!(input.customer_id, 7);
        assert_eq!(input.products[1].price, 4.0);
    }
}
