pub mod company;

pub use company::PostgresCompanyRepository;
