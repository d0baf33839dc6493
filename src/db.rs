pub mod user_repo;
pub use user_repo::UserRepository;
pub mod brand_repo;
pub use brand_repo::BrandRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod purchase_repo;
pub use purchase_repo::PurchaseRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
