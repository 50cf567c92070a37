use nuclear_spa_router::{QueryCodec, QueryParams, QueryValue, RouteTree};

use proptest::collection::vec;
use proptest::prelude::*;

#[test]
fn tree_users() {
    let mut tree = RouteTree::new();
    let a = tree.root("users", false);
    let b = tree.add_child(a, ":id", false);

    assert_eq!(&*tree.match_path(a, &["users", "42"]).unwrap(), &[a, b]);
    assert_eq!(&*tree.match_path(a, &["users"]).unwrap(), &[a]);
    assert!(tree.match_path(a, &["posts", "42"]).is_none());
}

#[test]
fn tree_abstract_layout() {
    let mut tree = RouteTree::new();
    let app = tree.root("/", true);
    let home = tree.add_child(app, "home", false);
    let settings = tree.add_child(app, "settings", true);
    let profile = tree.add_child(settings, "profile", false);

    let chain = tree.match_path(app, &["", "settings", "profile"]).unwrap();
    assert_eq!(&*chain, &[app, settings, profile]);
    assert_eq!(&*tree.match_path(app, &["", "home"]).unwrap(), &[app, home]);
    assert_eq!(&*tree.match_path(app, &[""]).unwrap(), &[app]);
    assert!(tree.match_path(app, &["home"]).is_none());
    assert_eq!(tree.pattern(profile), "//settings/profile");
}

fn segment() -> impl Strategy<Value = String> {
    prop_oneof!["[a-c]{1,2}", ":[a-c]{1,2}"]
}

fn path() -> impl Strategy<Value = Vec<String>> {
    vec(segment(), 1..4)
}

proptest! {
    #[test]
    fn child_path_extends_parent(parent in path(), child in path()) {
        let mut tree = RouteTree::new();
        let p = tree.root(&parent.join("/"), false);
        let c = tree.add_child(p, &child.join("/"), false);

        let mut expected: Vec<&str> = tree.full_path(p);
        expected.extend(child.iter().map(String::as_str));
        prop_assert_eq!(tree.full_path(c), expected);
    }

    #[test]
    fn match_is_pure(
        parent in path(),
        children in vec(path(), 0..4),
        input in vec("[a-c]{1,2}", 0..6),
    ) {
        let mut tree = RouteTree::new();
        let root = tree.root(&parent.join("/"), false);
        for child in &children {
            tree.add_child(root, &child.join("/"), false);
        }
        let parts: Vec<&str> = input.iter().map(String::as_str).collect();

        let first = tree.match_path(root, &parts);
        let second = tree.match_path(root, &parts);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(tree.len(), children.len() + 1);

        if let Some(chain) = first {
            prop_assert_eq!(chain[0], root);
            let leaf = chain[chain.len() - 1];
            prop_assert_eq!(tree.full_path(leaf).len(), parts.len());
        }
    }

    #[test]
    fn query_round_trip(
        pairs in vec(("[a-z]{1,4}", vec("[a-z0-9]{1,4}", 1..4)), 0..6),
    ) {
        let codec = QueryCodec::new(",");
        let mut params = QueryParams::new();
        for (key, values) in pairs {
            let value = if values.len() == 1 {
                QueryValue::Single(values[0].clone())
            } else {
                QueryValue::Multi(values)
            };
            params.insert(key, value);
        }

        let qs = codec.encode(&params);
        prop_assert_eq!(codec.decode(&qs), params);
    }
}
