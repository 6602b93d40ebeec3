//! Tests for command-line construction across all operations.

use proptest::prelude::*;
use reg_cli::command::*;
use reg_cli::RegDataType;

/// Flag tokens of the query translation table, in declared order.
const QUERY_TABLE: &[&str] = &[
    "/v", "/ve", "/s", "/se", "/f", "/k", "/d", "/c", "/e", "/t", "/z", "/reg:32", "/reg:64",
];

fn flag_tokens(command: &str) -> Vec<&str> {
    command
        .split(' ')
        .filter(|token| token.starts_with('/'))
        .collect()
}

#[test]
fn test_recursive_view_ordering() {
    let options = QueryOptions {
        recursive: true,
        view_32bit: true,
        ..Default::default()
    };
    let command = query_command(r"HIVE\Sub", &options);

    let s_pos = command.find("/s").expect("missing /s");
    let view_pos = command.find("/reg:32").expect("missing /reg:32");
    assert!(s_pos < view_pos, "expected /s before /reg:32 in {command:?}");
}

#[test]
fn test_full_query_table_order() {
    let options = QueryOptions {
        value_name: Some("Name".to_string()),
        default_value: true,
        recursive: true,
        separator: Some('#'),
        search_pattern: Some("pat".to_string()),
        search_keynames_only: true,
        search_data_only: true,
        case_sensitive: true,
        exact_matches: true,
        data_type: Some(RegDataType::Sz),
        numeric_type: true,
        view_32bit: true,
        view_64bit: true,
    };
    let command = query_command(r"HIVE\Sub", &options);
    assert_eq!(
        command,
        r#"REG QUERY HIVE\Sub /v "Name" /ve /s /se # /f "pat" /k /d /c /e /t "REG_SZ" /z /reg:32 /reg:64"#
    );
}

#[test]
fn test_verbs_and_operands() {
    assert!(query_command(r"H\S", &QueryOptions::default()).starts_with("REG QUERY H\\S"));
    assert!(add_command(r"H\S", &AddOptions::default()).starts_with("REG ADD H\\S"));
    assert!(delete_command(r"H\S", &DeleteOptions::default()).starts_with("REG DELETE H\\S"));
    assert!(copy_command(r"H\A", r"H\B", &CopyOptions::default()).starts_with("REG COPY H\\A H\\B"));
    assert!(save_command(r"H\S", "f.hiv", &SaveOptions::default()).starts_with("REG SAVE H\\S f.hiv"));
    assert!(
        restore_command(r"H\S", "f.hiv", &RestoreOptions::default())
            .starts_with("REG RESTORE H\\S f.hiv")
    );
    assert!(load_command(r"H\S", "f.hiv", &LoadOptions::default()).starts_with("REG LOAD H\\S f.hiv"));
    assert!(
        unload_command(r"H\S", "f.hiv", &UnloadOptions::default())
            .starts_with("REG UNLOAD H\\S f.hiv")
    );
    assert!(
        compare_command(r"H\A", r"H\B", &CompareOptions::default())
            .starts_with("REG COMPARE H\\A H\\B")
    );
    assert!(
        export_command(r"H\S", "f.reg", &ExportOptions::default())
            .starts_with("REG EXPORT H\\S f.reg")
    );
}

#[test]
fn test_forcing_verbs_bake_their_flag() {
    assert!(add_command(r"H\S", &AddOptions::default()).ends_with("/f"));
    assert!(delete_command(r"H\S", &DeleteOptions::default()).ends_with("/f"));
    assert!(copy_command(r"H\A", r"H\B", &CopyOptions::default()).ends_with("/f"));
    assert!(save_command(r"H\S", "f.hiv", &SaveOptions::default()).ends_with("/y"));
    assert!(export_command(r"H\S", "f.reg", &ExportOptions::default()).ends_with("/y"));
}

#[test]
fn test_non_forcing_verbs_emit_bare_commands() {
    assert_eq!(
        restore_command(r"H\S", "f.hiv", &RestoreOptions::default()),
        r"REG RESTORE H\S f.hiv"
    );
    assert_eq!(
        compare_command(r"H\A", r"H\B", &CompareOptions::default()),
        r"REG COMPARE H\A H\B"
    );
}

#[test]
fn test_add_data_space_stripping_is_pinned() {
    // Multi-word data is stripped, not quoted. Pinned deliberately: the
    // emitted command must stay byte-identical across versions.
    let options = AddOptions {
        data: Some("two words here".to_string()),
        ..Default::default()
    };
    let command = add_command(r"H\S", &options);
    assert_eq!(command, r"REG ADD H\S /f /d twowordshere");
}

proptest! {
    /// Emitted flag order always follows the translation table, no matter
    /// which combination of options is set.
    #[test]
    fn prop_query_flag_order_is_table_order(
        value_name in proptest::option::of("[A-Za-z]{1,8}"),
        default_value: bool,
        recursive: bool,
        search_pattern in proptest::option::of("[A-Za-z]{1,8}"),
        search_keynames_only: bool,
        search_data_only: bool,
        case_sensitive: bool,
        exact_matches: bool,
        numeric_type: bool,
        view_32bit: bool,
        view_64bit: bool,
    ) {
        let options = QueryOptions {
            value_name,
            default_value,
            recursive,
            separator: None,
            search_pattern,
            search_keynames_only,
            search_data_only,
            case_sensitive,
            exact_matches,
            data_type: None,
            numeric_type,
            view_32bit,
            view_64bit,
        };
        let command = query_command(r"HIVE\Sub", &options);

        let mut next_allowed = 0usize;
        for token in flag_tokens(&command) {
            let position = QUERY_TABLE
                .iter()
                .position(|entry| *entry == token)
                .expect("unexpected flag token");
            prop_assert!(
                position >= next_allowed,
                "flag {} out of table order in {:?}",
                token,
                command
            );
            next_allowed = position + 1;
        }

        // Switches appear exactly when their field is set.
        let tokens = flag_tokens(&command);
        prop_assert_eq!(tokens.contains(&"/ve"), default_value);
        prop_assert_eq!(tokens.contains(&"/s"), recursive);
        prop_assert_eq!(tokens.contains(&"/k"), search_keynames_only);
        prop_assert_eq!(tokens.contains(&"/d"), search_data_only);
        prop_assert_eq!(tokens.contains(&"/c"), case_sensitive);
        prop_assert_eq!(tokens.contains(&"/e"), exact_matches);
        prop_assert_eq!(tokens.contains(&"/z"), numeric_type);
        prop_assert_eq!(tokens.contains(&"/reg:32"), view_32bit);
        prop_assert_eq!(tokens.contains(&"/reg:64"), view_64bit);
    }
}
