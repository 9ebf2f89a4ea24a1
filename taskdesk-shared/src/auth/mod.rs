/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Signed, time-limited login tokens
///
/// # Example
///
/// ```no_run
/// use taskdesk_shared::auth::password::{hash_password, verify_password};
/// use taskdesk_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("pw12345")?;
/// assert!(verify_password("pw12345", &hash)?);
///
/// let claims = Claims::new(1, "a@x.com", "Ann");
/// let token = create_token(&claims, "a-secret-that-is-at-least-32-bytes")?;
/// let decoded = validate_token(&token, "a-secret-that-is-at-least-32-bytes")?;
/// assert_eq!(decoded.id, 1);
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod password;
