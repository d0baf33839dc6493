// src/services/report.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BrandRepository, CustomerRepository, ProductRepository, PurchaseRepository, ReportRepository},
    models::{
        catalog::{Brand, Product},
        purchase::PurchaseLine,
        report::{BrandWithProducts, TopCustomerEntry, TopProductEntry},
    },
};

// Agrupa los productos bajo su marca (para el informe por marcas).
// Las marcas sin productos aparecen con la lista vacía.
pub(crate) fn group_by_brand(brands: Vec<Brand>, products: Vec<Product>) -> Vec<BrandWithProducts> {
    brands
        .into_iter()
        .map(|brand| {
            let products = products
                .iter()
                .filter(|p| p.brand_id == brand.id)
                .cloned()
                .collect();
            BrandWithProducts {
                id: brand.id,
                name: brand.name,
                products,
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct ReportService {
    report_repo: ReportRepository,
    brand_repo: BrandRepository,
    product_repo: ProductRepository,
    customer_repo: CustomerRepository,
    purchase_repo: PurchaseRepository,
}

impl ReportService {
    pub fn new(
        report_repo: ReportRepository,
        brand_repo: BrandRepository,
        product_repo: ProductRepository,
        customer_repo: CustomerRepository,
        purchase_repo: PurchaseRepository,
    ) -> Self {
        Self {
            report_repo,
            brand_repo,
            product_repo,
            customer_repo,
            purchase_repo,
        }
    }

    pub async fn top_ten_products(&self) -> Result<Vec<TopProductEntry>, AppError> {
        self.report_repo.top_ten_products().await
    }

    pub async fn top_ten_customers(&self) -> Result<Vec<TopCustomerEntry>, AppError> {
        self.report_repo.top_ten_customers().await
    }

    pub async fn products_by_brand(&self) -> Result<Vec<BrandWithProducts>, AppError> {
        let brands = self.brand_repo.get_all().await?;
        let products = self.product_repo.get_all().await?;
        Ok(group_by_brand(brands, products))
    }

    // Compras del cliente ligado a la identidad autenticada
    pub async fn purchases_for_user(&self, user_id: Uuid) -> Result<Vec<PurchaseLine>, AppError> {
        let customer = self
            .customer_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::CustomerNotFound)?;

        self.purchase_repo.find_by_customer(customer.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(brand_id: Uuid, model: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            brand_id,
            name: "Portátil".into(),
            model: model.into(),
            units: 5,
            price: Decimal::new(100, 2),
            vip: false,
        }
    }

    #[test]
    fn groups_products_under_their_brand() {
        let acme = Brand {
            id: Uuid::new_v4(),
            name: "Acme".into(),
        };
        let globex = Brand {
            id: Uuid::new_v4(),
            name: "Globex".into(),
        };
        let products = vec![product(acme.id, "X1"), product(acme.id, "X2"), product(globex.id, "G1")];

        let grouped = group_by_brand(vec![acme.clone(), globex.clone()], products);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "Acme");
        assert_eq!(grouped[0].products.len(), 2);
        assert_eq!(grouped[1].products.len(), 1);
    }

    #[test]
    fn brand_without_products_gets_empty_list() {
        let brand = Brand {
            id: Uuid::new_v4(),
            name: "Hollow".into(),
        };
        let grouped = group_by_brand(vec![brand], vec![]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].products.is_empty());
    }
}
