//! Profile viewing and updates.

use clap::Subcommand;

use kommerce_client::api::types::UpdateUserRequest;

use super::CommandResult;
use crate::context::AppContext;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show your profile
    Show,
    /// Update profile fields
    Update {
        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Delivery address
        #[arg(long)]
        address: Option<String>,
    },
}

pub async fn run(ctx: &mut AppContext, action: ProfileAction) -> CommandResult {
    match action {
        ProfileAction::Show => {
            let me = ctx.api.current_user().await?;
            // /auth/me can be sparse; the user record has the full profile.
            let user = match me.id {
                Some(id) => ctx.api.get_user(id).await?,
                None => me,
            };

            println!("Email:   {}", user.email.as_deref().unwrap_or("-"));
            if let Some(name) = &user.name {
                println!("Name:    {name}");
            }
            if let Some(phone) = &user.phone {
                println!("Phone:   {phone}");
            }
            if let Some(address) = &user.address {
                println!("Address: {address}");
            }
            println!("Role:    {}", user.role());
        }
        ProfileAction::Update {
            first_name,
            last_name,
            phone,
            address,
        } => {
            let request = UpdateUserRequest {
                first_name,
                last_name,
                email: None,
                phone,
                address,
            };
            if request.is_empty() {
                return Err(
                    "nothing to update; pass --first-name, --last-name, --phone, or --address"
                        .into(),
                );
            }

            let me = ctx.api.current_user().await?;
            let id = me.id.ok_or("the backend did not report your user ID")?;

            ctx.api.update_user(id, &request).await?;
            println!("Profile updated.");
        }
    }
    Ok(())
}
