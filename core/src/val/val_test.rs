#[cfg(test)]
mod tests {
    use crate::val::{Printer, Value};

    #[test]
    fn fields_only_for_map_like_values() {
        let map = Value::map([("foo", Value::Int(1))]);
        let user = Value::structure("User", [("name", Value::from("jane"))]);

        assert!(map.fields().is_some_and(|f| f.contains_key("foo")));
        assert!(user.fields().is_some_and(|f| f.contains_key("name")));
        assert!(Value::Int(1).fields().is_none());
        assert!(Value::namespace("Enum").fields().is_none());
        assert_eq!(Value::namespace("Enum").namespace_ref(), Some("Enum"));
    }

    #[test]
    fn prints_scalars() {
        let p = Printer::default();
        assert_eq!(p.print(&Value::Nil), "nil");
        assert_eq!(p.print(&Value::Int(-42)), "-42");
        assert_eq!(p.print(&Value::Float(1.0)), "1.0");
        assert_eq!(p.print(&Value::atom("ok")), ":ok");
        assert_eq!(p.print(&Value::from("a \"b\"\n")), r#""a \"b\"\n""#);
        assert_eq!(p.print(&Value::namespace("Enum")), "Enum");
    }

    #[test]
    fn prints_maps_in_field_order() {
        let p = Printer::default();
        let v = Value::map([("foo", Value::Int(1)), ("bar", Value::from(vec![1i64, 2]))]);
        assert_eq!(p.print(&v), "%{bar: [1, 2], foo: 1}");

        let s = Value::structure("URI", [("host", Value::from("example.com"))]);
        assert_eq!(p.print(&s), r#"%URI{host: "example.com"}"#);

        let odd = Value::map([("with space", Value::Nil)]);
        assert_eq!(p.print(&odd), r#"%{"with space": nil}"#);
    }

    #[test]
    fn wraps_wide_collections() {
        let p = Printer::new(22, 50);
        let v = Value::map([
            ("alpha", Value::from("aaaaaaaa")),
            ("beta", Value::map([("x", Value::Int(1)), ("y", Value::Int(2))])),
        ]);
        let expected = "%{\n  alpha: \"aaaaaaaa\",\n  beta: %{x: 1, y: 2}\n}";
        assert_eq!(p.print(&v), expected);
    }

    #[test]
    fn truncates_long_collections() {
        let p = Printer::new(80, 3);
        let v = Value::from(vec![1i64, 2, 3, 4, 5]);
        assert_eq!(p.print(&v), "[1, 2, 3, ...]");
    }
}
