//! Route templates for request spans and metric labels.

/// Collections whose child segment is a record id.
const ID_PARENTS: [&str; 4] = ["categories", "products", "promocodes", "orders"];

/// Named actions that sit where an id would otherwise be.
const ACTIONS: [&str; 2] = ["reorder", "validate"];

/// Replace record ids in `path` with `{id}` so label cardinality stays bounded.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous = "";

    for segment in path.trim_start_matches('/').split('/') {
        template.push('/');

        if ID_PARENTS.contains(&previous) && !ACTIONS.contains(&segment) {
            template.push_str("{id}");
        } else {
            template.push_str(segment);
        }

        previous = segment;
    }

    template
}
