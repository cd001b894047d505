//! Admin role check.

use salvo::prelude::*;

use crate::extensions::*;

/// Reject callers that are not on the admin allow-list.
///
/// Must run after the auth middleware.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let admin = match depot.identity_or_401() {
        Ok(identity) => identity.admin,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    if !admin {
        res.render(StatusError::forbidden().brief("Forbidden access"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
