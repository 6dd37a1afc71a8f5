use ops_desk::identity::{resolve, ParsedName};

fn assert_name(name: &ParsedName, first: &str, last: &str, display: &str, formal: &str) {
    assert_eq!(name.first_name, first, "first name");
    assert_eq!(name.last_name, last, "last name");
    assert_eq!(name.display_name, display, "display name");
    assert_eq!(name.formal_name, formal, "formal name");
}

#[test]
fn dotted_local_part_drops_disambiguating_digits() {
    let name = resolve("john.smith42@x.com");
    assert_name(&name, "John", "Smith", "John Smith", "Mr. Smith");
}

#[test]
fn underscore_and_dash_separators_split_names() {
    let jane = resolve("jane_doe@x.com");
    assert_name(&jane, "Jane", "Doe", "Jane Doe", "Mr. Doe");

    let tonio = resolve("tonio-r@x.com");
    assert_name(&tonio, "Tonio", "R", "Tonio R", "Mr. R");
}

#[test]
fn known_first_name_prefix_splits_unseparated_local_part() {
    let name = resolve("tonior@x.com");
    assert_name(&name, "Tonio", "R", "Tonio R", "Mr. R");
}

#[test]
fn known_prefix_runs_after_digit_strip() {
    let name = resolve("priyanair07@x.com");
    assert_name(&name, "Priya", "Nair", "Priya Nair", "Mr. Nair");
}

#[test]
fn camel_case_local_part_splits_on_capital() {
    let john = resolve("johnSmith@x.com");
    assert_name(&john, "John", "Smith", "John Smith", "Mr. Smith");

    let unknown = resolve("xiaKowal@x.com");
    assert_name(&unknown, "Xia", "Kowal", "Xia Kowal", "Mr. Kowal");
}

#[test]
fn camel_case_split_depends_on_the_capital_boundary() {
    let camel = resolve("xiaKowal@x.com");
    assert_name(&camel, "Xia", "Kowal", "Xia Kowal", "Mr. Kowal");

    let flat = resolve("xiakowal@x.com");
    assert_name(&flat, "Xiakowal", "", "Xiakowal", "Xiakowal");
}

#[test]
fn unrecognised_local_part_becomes_first_name() {
    let name = resolve("xk7@x.com");
    assert_name(&name, "Xk", "", "Xk", "Xk");
}

#[test]
fn empty_input_yields_empty_fields() {
    let name = resolve("");
    assert_name(&name, "", "", "", "");
}

#[test]
fn input_without_at_sign_is_treated_as_local_part() {
    let name = resolve("jane_doe");
    assert_name(&name, "Jane", "Doe", "Jane Doe", "Mr. Doe");
}

#[test]
fn casing_of_input_does_not_change_output() {
    let cases = [
        ("JOHN.SMITH42@X.COM", "john.smith42@x.com"),
        ("Jane_Doe@x.com", "jane_doe@x.com"),
        ("TONIOR@x.com", "tonior@x.com"),
        ("Tonior@x.com", "tonior@x.com"),
        ("XK7@x.com", "xk7@x.com"),
        ("KowalXia@x.com", "kowalxia@x.com"),
    ];

    for (mixed, lower) in cases {
        assert_eq!(resolve(mixed), resolve(lower), "{mixed} vs {lower}");
    }
}

#[test]
fn resolver_is_total_over_odd_inputs() {
    let inputs = [
        "@", "@@", ".", "_", "-", "...", "123", "a", "é.ü@x", "   ", "john.", ".smith",
        "x@y@z", "🙂.🙃@x.com",
    ];

    for input in inputs {
        let name = resolve(input);
        if name.last_name.is_empty() {
            assert_eq!(name.display_name, name.first_name, "{input}");
            assert_eq!(name.formal_name, name.first_name, "{input}");
        } else {
            assert_eq!(
                name.display_name,
                format!("{} {}", name.first_name, name.last_name),
                "{input}"
            );
            assert_eq!(name.formal_name, format!("Mr. {}", name.last_name), "{input}");
        }
    }
}

#[test]
fn parsed_name_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(resolve("jane_doe@x.com")).expect("serializes");
    assert_eq!(
        value,
        serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "formalName": "Mr. Doe",
            "displayName": "Jane Doe",
        })
    );
}
