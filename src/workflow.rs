//! The enrolment workflow: up to four calls in a fixed order, aborting at
//! the first failure.

use tracing::info;

use crate::{username, ApiClient, Config, Error};

/// Run the workflow: claim an enrolment token for a freshly generated
/// username, submit the photo, and, when `delete_user` is set, mint an
/// access token and delete the user again.
///
/// Steps execute strictly in order; the first error aborts the rest.
pub async fn run(config: &Config, client: &ApiClient, delete_user: bool) -> Result<(), Error> {
    let username = username::generate();
    info!(user = %username, "starting photo enrolment");

    let token = client.request_enrolment_token(config, &username).await?;
    client.submit_photo(config, &token).await?;
    info!("user '{username}' enrolled");

    if delete_user {
        let access_token = client.request_access_token(config).await?;
        client.delete_user(&access_token, &username).await?;
    }

    Ok(())
}
