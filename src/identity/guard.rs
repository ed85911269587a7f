use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use super::PlayerId;

/// The caller's identity as resolved by the authentication layer in front of
/// this service, carried in the `player-id` header. `None` when the request
/// carried no identity.
///
/// Resolution itself never fails: endpoints that work without a player accept
/// the absence, the others reject it through `require_player`.
pub struct CurrentPlayer(pub Option<PlayerId>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentPlayer {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let player = request
            .headers()
            .get_one("player-id")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(PlayerId::new);
        Outcome::Success(CurrentPlayer(player))
    }
}
