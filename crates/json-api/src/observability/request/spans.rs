//! Route labels for spans and metrics.

use uuid::Uuid;

/// Replace identifiers in `path` with placeholders so per-resource paths
/// collapse into one label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            label.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            label.push_str("{uuid}");
        } else if segment.contains('@') {
            label.push_str("{email}");
        } else {
            label.push_str(segment);
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_are_replaced() {
        let uuid = Uuid::now_v7();

        assert_eq!(route_label(&format!("/products/{uuid}")), "/products/{uuid}");
    }

    #[test]
    fn emails_are_replaced() {
        assert_eq!(route_label("/cart/ada@example.com"), "/cart/{email}");
    }

    #[test]
    fn static_paths_are_kept() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/admin/orders"), "/admin/orders");
    }
}
