use super::*;

// ════════════════════════════════════════════════════════════════
// System header filtering
// ════════════════════════════════════════════════════════════════

#[test]
fn top_level_system_declarations_are_dropped() {
    let root = tu([
        class("size_t_holder", "size_t_holder").system(),
        function("user_fn", "void"),
        namespace("std").system().with([class("vector", "std::vector")]),
    ]);
    let unit = run(&root);

    assert_eq!(names(&unit), vec!["user_fn"]);
}

#[test]
fn nested_system_declarations_are_dropped() {
    let root = tu([namespace("app").with([
        var("from_sdk", "int").system(),
        class("Widget", "app::Widget").with([
            base(Access::Public, "sdk::Object").system(),
            field("mine", "int", Access::Private),
            field("theirs", "int", Access::Private).system(),
            method("draw", "void").with([
                param("ctx", "Context &", "Context & ctx"),
                param("sys", "int", "int sys").system(),
            ]),
        ]),
        enum_decl("Mode", "app::Mode", "int").with([
            constant("Kept", "app::Mode", 0),
            constant("Dropped", "app::Mode", 1).system(),
        ]),
    ])]);
    let unit = run(&root);

    assert!(unit.find("from_sdk").is_none());
    let widget = record(&unit, "Widget");
    assert!(widget.bases.is_empty());
    assert_eq!(widget.members.len(), 2);
    let Declaration::Method(draw) = find_by_name(&unit, "draw") else {
        panic!("expected method");
    };
    assert_eq!(draw.signature.params.len(), 1);
    let Declaration::Enum(mode) = find_by_name(&unit, "Mode") else {
        panic!("expected enum");
    };
    assert_eq!(mode.constants.len(), 1);
}

#[test]
fn missing_location_is_treated_as_user_code() {
    let root = tu([class("Floating", "Floating").without_location()]);
    let unit = run(&root);

    assert_eq!(names(&unit), vec!["Floating"]);
}

#[test]
fn system_cursors_do_not_produce_diagnostics() {
    let root = tu([other("ClassTemplate", "basic_string").system()]);
    let unit = run(&root);

    assert!(unit.declarations.is_empty());
    assert!(unit.diagnostics.is_empty());
}
