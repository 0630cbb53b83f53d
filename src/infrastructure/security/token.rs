// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenVerifier,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, PublicKey,
    builder::{Algorithm, AuthorizerBuilder},
};

// Validity window is enforced here whatever checks the issuer embedded.
const VERIFIER_POLICY: &str = r"
    check if time($t), issued_at($i), $t >= $i;
    check if time($t), expires_at($e), $t <= $e;
    allow if user($id);
";

/// Verifies Biscuit tokens minted by the identity provider.
///
/// Tokens must carry `user("<uuid>")`, `issued_at(<date>)` and
/// `expires_at(<date>)` facts. Both dates are checked against the current time.
#[derive(Clone)]
pub struct BiscuitTokenVerifier {
    public: PublicKey,
}

impl BiscuitTokenVerifier {
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { public })
    }

    pub const fn from_public_key(public: PublicKey) -> Self {
        Self { public }
    }
}

#[async_trait]
impl TokenVerifier for BiscuitTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code(VERIFIER_POLICY)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        super::claims::parse_claims(facts)
    }
}
