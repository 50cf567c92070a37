use crate::tree::RouteId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("child is missing in parent route: parent = {parent}, child = {child}")]
    MissingChild { parent: RouteId, child: RouteId },

    #[error("route already has a parent: {0}")]
    AlreadyParented(RouteId),

    #[error("route does not belong to this route tree: {0}")]
    ForeignRoute(RouteId),

    #[error("child routes can not be added: {0}")]
    NotTopLevel(RouteId),

    #[error("history operation failed: {0}")]
    History(String),
}
