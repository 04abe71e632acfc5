//! Session commands: login, register, logout, whoami.

use secrecy::SecretString;

use kommerce_core::types::{Email, Role};

use super::CommandResult;
use crate::context::AppContext;

/// Log in and persist the session token.
pub async fn login(ctx: &mut AppContext, email: &str, password: &str) -> CommandResult {
    let email = Email::parse(email)?;

    let response = ctx.api.login(email.as_str(), password).await?;

    if let Some(token) = &response.token {
        ctx.tokens.save(&SecretString::from(token.clone()))?;
    }

    match response.user {
        Some(user) => println!(
            "Logged in as {} ({})",
            user.email.as_deref().unwrap_or(email.as_str()),
            user.role()
        ),
        None => println!("Logged in as {email}"),
    }
    Ok(())
}

/// Register a new account, logging in when the backend returns a token.
pub async fn register(
    ctx: &mut AppContext,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> CommandResult {
    let email = Email::parse(email)?;
    let role = registration_role(role)?;

    let request = kommerce_client::api::types::RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.into_inner(),
        password: password.to_owned(),
        role: Some(role),
        address: None,
    };

    let response = ctx.api.register(&request).await?;

    match response.token {
        Some(token) => {
            ctx.tokens.save(&SecretString::from(token))?;
            println!("Account created and logged in.");
        }
        None => println!("Account created. Run 'kommerce login' to sign in."),
    }
    Ok(())
}

/// The role a new account may register as. Admin accounts are provisioned
/// server-side, never through registration.
fn registration_role(raw: &str) -> Result<Role, String> {
    match raw.parse().unwrap_or_default() {
        role @ (Role::Customer | Role::Seller) => Ok(role),
        _ => Err(format!("role must be 'customer' or 'seller', got '{raw}'")),
    }
}

/// Forget the stored session token.
pub fn logout(ctx: &mut AppContext) -> CommandResult {
    ctx.api.logout();
    ctx.tokens.clear()?;
    println!("Logged out.");
    Ok(())
}

/// Show the logged-in user and their normalized role.
pub async fn whoami(ctx: &mut AppContext) -> CommandResult {
    if !ctx.api.has_token() {
        println!("Not logged in.");
        return Ok(());
    }

    let user = ctx.api.current_user().await?;
    println!("Email: {}", user.email.as_deref().unwrap_or("-"));
    if let Some(name) = &user.name {
        println!("Name:  {name}");
    }
    println!("Role:  {}", user.role());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_role_accepts_customer_and_seller() {
        assert_eq!(registration_role("customer").unwrap(), Role::Customer);
        assert_eq!(registration_role("SELLER").unwrap(), Role::Seller);
    }

    #[test]
    fn test_registration_role_rejects_admin_and_unknown() {
        assert!(registration_role("admin").is_err());
        assert!(registration_role("ROLE_ADMIN").is_err());
        assert!(registration_role("wizard").is_err());
    }
}
