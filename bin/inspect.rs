use understory::frames::{CallChain, FixedChain, Frame, RoutineId};
use understory::scope::{lookup_dynamic_scope, ScopeError};
use understory::timed;
use understory::values::DynValue;

/// A hand-built chain standing in for a real runtime bridge: main
/// called handle_request, which called render, which asked for the
/// dynamic scope.
fn sample_chain() -> CallChain {
    let mut render = Frame::new(RoutineId::fresh(), "render");
    render.define("template", "index.html");
    render.declare("output");
    render.capture("user");

    let mut handle_request = Frame::new(RoutineId::fresh(), "handle_request");
    handle_request.cell("user");
    handle_request.bind("user", "ada");
    handle_request.define("attempts", 3i64);

    let mut main_frame = Frame::new(RoutineId::fresh(), "main");
    main_frame.define("verbose", true);
    main_frame.define(
        "search_paths",
        vec![DynValue::from("/srv/app"), DynValue::from("/tmp")],
    );

    vec![render, handle_request, main_frame].into()
}

fn main() {
    println!("Dynamic-scope view of a synthetic call chain:");

    let source = FixedChain::new(sample_chain());
    let bindings = timed!(lookup_dynamic_scope(&source));

    for name in bindings.names() {
        match bindings.get(name) {
            Ok(val) => println!("  {} = {} ({})", name, val, val.type_name()),
            Err(ScopeError::UnboundName(_)) => println!("  {} is declared but unbound", name),
            Err(e) => println!("  {}", e),
        }
    }

    println!();
    println!("Looking up a name no frame declares:");
    match bindings.get("no_such_name") {
        Ok(val) => println!("  unexpectedly found {}", val),
        Err(e) => println!("  {}", e),
    }
}
