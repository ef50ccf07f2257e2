use std::fmt::{Display, Formatter};
use std::sync::Arc;

use marquee_model::MediaId;

/// External router the carousel hands detail navigation to.
///
/// Fire and forget: the carousel expects no answer and keeps running.
pub trait NavigationTarget: Send + Sync {
    fn navigate_to_detail(&self, id: MediaId);
}

impl<T> NavigationTarget for Arc<T>
where
    T: NavigationTarget + ?Sized,
{
    fn navigate_to_detail(&self, id: MediaId) {
        (**self).navigate_to_detail(id)
    }
}

/// Router path of a title's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailRoute(pub MediaId);

impl DetailRoute {
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl Display for DetailRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/Moviedetails/{}", self.0)
    }
}
