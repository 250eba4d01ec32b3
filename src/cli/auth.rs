use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{Res, error, focus, management::TokenManager, spotify, success, types::PkceToken};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    let focus = focus::for_platform();
    match spotify::auth::auth(shared_state, focus.as_ref()).await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("{}", e),
    }
}

/// Returns a valid access token from the cache.
///
/// Without a cached token, `login_if_missing` decides between running the
/// interactive authorization flow and failing with a hint to run `auth`.
pub(crate) async fn access_token(login_if_missing: bool) -> Res<String> {
    match TokenManager::load().await {
        Ok(mut token_mgr) => Ok(token_mgr.get_valid_token().await),
        Err(e) if !login_if_missing => {
            Err(format!("Failed to load token. Please run spotmood auth\n Error: {}", e).into())
        }
        Err(_) => {
            let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            let focus = focus::for_platform();
            let token = spotify::auth::auth(shared_state, focus.as_ref()).await?;
            success!("Authentication successful!");
            Ok(token.access_token)
        }
    }
}
