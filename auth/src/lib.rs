//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the company service:
//! - Password hashing (Argon2id)
//! - Signed access token generation and validation
//! - Authentication coordination
//!
//! The service defines its own authentication traits and adapts these
//! implementations. This keeps the domain decoupled from the concrete
//! hashing and token algorithms so either can be swapped without touching
//! callers.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Signed Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new("company-123", Duration::hours(24));
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "company-123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! assert!(auth.verify_password("password123", &hash));
//! let token = auth.generate_token("company-123").unwrap();
//!
//! // Validate token
//! let subject = auth.validate_token(&token).unwrap();
//! assert_eq!(subject, "company-123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
