use contracts::domain::a002_order::aggregate::{OrderInput, OrderOption, Product};

use crate::shared::upstream::dto::{PedidoDto, PedidoInputDto, ProductoDto};

impl PedidoDto {
    pub fn to_order_option(&self) -> OrderOption {
        OrderOption {
            id: self.id,
            total: self.total,
        }
    }
}

impl From<Product> for ProductoDto {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
        }
    }
}

impl From<OrderInput> for PedidoInputDto {
    fn from(input: OrderInput) -> Self {
        Self {
            customer_id: input.customer_id,
            products: input.products.into_iter().map(ProductoDto::from).collect(),
        }
    }
}
