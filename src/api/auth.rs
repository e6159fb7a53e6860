use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use log::debug;
use reqwest::Client;
use serde_json::{Value, json};

use crate::{
    config,
    error::{Error, Result},
    server::AppState,
    types::{GoogleProfile, NewUser, OAuthTokenResponse, Provider, SpotifyProfile},
    utils,
};

/// Pending sign-in parked between the login redirect and the callback,
/// keyed by the opaque `state` value.
#[derive(Debug, Clone)]
pub struct PendingLogin {
    pub provider: Provider,
    pub code_verifier: String,
}

/// `GET /api/auth/{provider}/login`
///
/// Builds the provider authorization URL (PKCE challenge plus a random
/// state), parks the verifier for the callback and redirects the client.
pub async fn login(
    Path(provider): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let provider: Provider = provider.parse().map_err(Error::Validation)?;

    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let login_state = utils::generate_state();

    {
        let mut logins = state.logins.lock().await;
        logins.insert(
            login_state.clone(),
            PendingLogin {
                provider,
                code_verifier,
            },
        );
    }

    let auth_url = format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}&state={login_state}",
        auth_url = authorize_url(provider),
        client_id = client_id(provider),
        redirect_uri = redirect_uri(provider),
        code_challenge = code_challenge,
        scope = scope(provider),
        login_state = login_state
    );

    Ok(Redirect::temporary(&auth_url))
}

/// `GET /api/auth/{provider}/callback`
///
/// Exchanges the authorization code, fetches the provider profile, creates
/// the user record on first sign-in and answers with a session token plus
/// the session payload.
pub async fn callback(
    Path(provider): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    let provider: Provider = provider.parse().map_err(Error::Validation)?;
    let code = params
        .get("code")
        .ok_or_else(|| Error::Validation("Missing authorization code".to_string()))?;
    let login_state = params
        .get("state")
        .ok_or_else(|| Error::Validation("Missing state parameter".to_string()))?;

    // An unknown or mismatched state means this callback belongs to no
    // login we started.
    let pending = state
        .logins
        .lock()
        .await
        .remove(login_state)
        .ok_or(Error::Unauthenticated)?;
    if pending.provider != provider {
        return Err(Error::Unauthenticated);
    }

    let access_token = exchange_code(&state.http, provider, code, &pending.code_verifier).await?;
    let profile = fetch_profile(&state.http, provider, &access_token).await?;

    let user = state.store.find_or_create_user(profile).await?;
    let token = state.sessions.issue(&user)?;
    debug!("signed in user {} via {provider}", user.id);

    Ok(Json(json!({
        "token": token,
        "user": {
            "id": user.id,
            "name": user.name,
            "email": user.email,
            "image": user.image,
        },
    })))
}

async fn exchange_code(
    http: &Client,
    provider: Provider,
    code: &str,
    verifier: &str,
) -> Result<String> {
    let response = http
        .post(token_url(provider))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri(provider).as_str()),
            ("client_id", client_id(provider).as_str()),
            ("client_secret", client_secret(provider).as_str()),
            ("code_verifier", verifier),
        ])
        .send()
        .await?
        .error_for_status()?;

    let token: OAuthTokenResponse = response.json().await?;
    Ok(token.access_token)
}

async fn fetch_profile(http: &Client, provider: Provider, access_token: &str) -> Result<NewUser> {
    match provider {
        Provider::Google => {
            let profile: GoogleProfile = http
                .get(config::google_userinfo_url())
                .bearer_auth(access_token)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            Ok(NewUser {
                name: profile.name,
                email: require_email(profile.email)?,
                image: profile.picture,
                oauth_id: profile.id,
                provider,
            })
        }
        Provider::Spotify => {
            let api_url = format!("{uri}/me", uri = config::spotify_api_url());
            let profile: SpotifyProfile = http
                .get(&api_url)
                .bearer_auth(access_token)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            Ok(NewUser {
                name: profile.display_name,
                email: require_email(profile.email)?,
                image: profile.images.first().map(|image| image.url.clone()),
                oauth_id: profile.id,
                provider,
            })
        }
    }
}

// Accounts are keyed by email; a provider account without one cannot sign in.
fn require_email(email: Option<String>) -> Result<String> {
    email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| Error::Validation("Identity provider returned no email".to_string()))
}

fn authorize_url(provider: Provider) -> String {
    match provider {
        Provider::Google => config::google_auth_url(),
        Provider::Spotify => config::spotify_auth_url(),
    }
}

fn token_url(provider: Provider) -> String {
    match provider {
        Provider::Google => config::google_token_url(),
        Provider::Spotify => config::spotify_token_url(),
    }
}

fn client_id(provider: Provider) -> String {
    match provider {
        Provider::Google => config::google_client_id(),
        Provider::Spotify => config::spotify_client_id(),
    }
}

fn client_secret(provider: Provider) -> String {
    match provider {
        Provider::Google => config::google_client_secret(),
        Provider::Spotify => config::spotify_client_secret(),
    }
}

fn redirect_uri(provider: Provider) -> String {
    format!(
        "{base}/api/auth/{provider}/callback",
        base = config::oauth_redirect_base(),
        provider = provider.as_str()
    )
}

fn scope(provider: Provider) -> &'static str {
    match provider {
        Provider::Google => "openid%20email%20profile",
        Provider::Spotify => "user-read-email",
    }
}
