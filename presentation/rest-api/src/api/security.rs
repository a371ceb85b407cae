use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::{Actor, Role};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
    pub exp: u64,
}

/// Verifies HS256 tokens issued by the auth service.
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Actor, String> {
        let token_data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

        let claims = token_data.claims;
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|_| format!("auth.invalid_role: {}", claims.role))?;

        Ok(Actor::new(claims.sub, role, claims.email))
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub Actor);

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<Actor> {
    let Some(verifier) = req.data::<JwtVerifier>() else {
        tracing::error!("JWT verifier is not registered on the route");
        return None;
    };

    match verifier.verify(&bearer.token) {
        Ok(actor) => Some(actor),
        Err(e) => {
            tracing::warn!("JWT auth failed: {e}");
            None
        }
    }
}
