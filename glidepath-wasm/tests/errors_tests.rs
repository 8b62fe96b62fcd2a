use glidepath_wasm::Animator;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(600);
    canvas.set_height(400);
    canvas
}

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn ok_value(v: &JsValue) -> Option<JsValue> {
    let ok = Reflect::get(v, &JsValue::from_str("ok")).ok()?.as_bool()?;
    if !ok {
        return None;
    }
    Reflect::get(v, &JsValue::from_str("value")).ok()
}

#[wasm_bindgen_test]
fn non_finite_pointer_coordinates_are_rejected() {
    let a = Animator::new(make_canvas());
    assert!(is_err(&a.pointer_down_res(f32::NAN, 10.0), "non_finite"));
    assert!(is_err(&a.pointer_down_res(10.0, f32::INFINITY), "non_finite"));
    assert!(!a.is_dragging());
}

#[wasm_bindgen_test]
fn speed_validation_envelopes() {
    let a = Animator::new(make_canvas());
    assert!(is_err(&a.set_object_speed_res(0, f32::NAN), "non_finite"));
    assert!(is_err(&a.set_object_speed_res(0, -5.0), "out_of_range"));
    assert!(is_err(&a.set_object_speed_res(99, 10.0), "invalid_id"));
}

#[wasm_bindgen_test]
fn successful_calls_wrap_ok_values() {
    let a = Animator::new(make_canvas());

    let r = a.set_object_speed_res(0, 42.0);
    assert_eq!(ok_value(&r).and_then(|v| v.as_bool()), Some(true));

    // A miss is still an ok envelope, just with `false` inside.
    let r = a.pointer_down_res(550.0, 30.0);
    assert_eq!(ok_value(&r).and_then(|v| v.as_bool()), Some(false));

    // A hit on the first demo handle.
    let r = a.pointer_down_res(60.0, 300.0);
    assert_eq!(ok_value(&r).and_then(|v| v.as_bool()), Some(true));
    a.pointer_up();
}
