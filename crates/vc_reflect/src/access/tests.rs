use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::Reflect;
use crate::access::{AccessError, BuildError, MethodDescriptor, MethodKind};
use crate::access::{BoxedAction, BoxedGetter, BoxedSetter, TypedGetter};
use crate::info::Type;

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    label: String,
}

impl Point {
    fn new(x: i32) -> Self {
        Self {
            x,
            label: String::new(),
        }
    }

    fn x(&self) -> i32 {
        self.x
    }

    fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    // Returns the previous value, accessors discard it.
    fn replace_label(&mut self, label: String) -> String {
        core::mem::replace(&mut self.label, label)
    }

    fn clear(&mut self) {
        self.x = 0;
        self.label.clear();
    }
}

crate::impl_type_path!((in demo::shapes) Point);

#[derive(Debug, PartialEq)]
struct Counter {
    hits: u32,
}

static COUNTER_SETS: AtomicUsize = AtomicUsize::new(0);

impl Counter {
    fn hit(&mut self) -> u32 {
        self.hits += 1;
        self.hits
    }

    fn set_hits(&mut self, hits: u32) {
        COUNTER_SETS.fetch_add(1, Ordering::SeqCst);
        self.hits = hits;
    }
}

crate::impl_type_path!((in demo) Counter);

// -----------------------------------------------------------------------------
// Descriptor

#[test]
fn descriptor_metadata() {
    let method = MethodDescriptor::setter("replace_label", Point::replace_label);

    assert_eq!(method.name(), "replace_label");
    assert_eq!(method.kind(), MethodKind::Setter);
    assert_eq!(method.declaring_type(), &Type::of::<Point>());
    assert_eq!(method.parameter_types(), &[Type::of::<String>()]);
    assert_eq!(method.return_type(), &Type::of::<String>());

    let method = MethodDescriptor::action("hit", Counter::hit);
    assert_eq!(method.kind(), MethodKind::Action);
    assert!(method.parameter_types().is_empty());
    assert_eq!(method.return_type(), &Type::of::<u32>());

    let debug = format!("{method:?}");
    assert!(debug.contains("\"hit\""));
    assert!(debug.contains("demo::Counter"));
}

// -----------------------------------------------------------------------------
// Getter

#[test]
fn boxed_getter_matches_direct_call() {
    let getter = BoxedGetter::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();

    for x in [i32::MIN, -1, 0, 5, i32::MAX] {
        let point = Point::new(x);
        let value = getter.get(&point).unwrap();
        assert_eq!(value.take::<i32>().unwrap(), point.x());
    }
}

#[test]
fn boxed_getter_rejects_wrong_target() {
    let getter = BoxedGetter::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();

    let err = getter.get(&Counter { hits: 1 }).unwrap_err();
    assert_eq!(
        err,
        AccessError::TargetMismatch {
            method: "x",
            expected: "demo::shapes::Point",
            actual: "demo::Counter",
        }
    );
}

#[test]
fn narrowing_through_erased_targets() {
    let getter = BoxedGetter::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();
    let setter =
        BoxedSetter::from_method(&MethodDescriptor::setter("set_x", Point::set_x)).unwrap();
    let clear = BoxedAction::from_method(&MethodDescriptor::action("clear", Point::clear)).unwrap();

    let mut boxed: Box<dyn Reflect> = Point::new(5).into_boxed_reflect();
    assert_eq!(getter.get(&*boxed).unwrap().take::<i32>().unwrap(), 5);

    setter.set(&mut *boxed, 7_i32.into_boxed_reflect()).unwrap();
    assert_eq!(boxed.downcast_ref::<Point>(), Some(&Point::new(7)));

    clear.invoke(&mut *boxed).unwrap();
    assert_eq!(boxed.take::<Point>().unwrap(), Point::new(0));

    let mut other = 3_i32;
    assert_eq!(
        clear.invoke(&mut other).unwrap_err(),
        AccessError::TargetMismatch {
            method: "clear",
            expected: "demo::shapes::Point",
            actual: "i32",
        }
    );
    assert_eq!(other, 3);
}

#[test]
fn typed_getter_matches_boxed_getter() {
    let method = MethodDescriptor::getter("label", Point::label);
    let boxed = BoxedGetter::from_method(&method).unwrap();
    let typed = TypedGetter::<String>::from_method(&method).unwrap();

    let mut point = Point::new(3);
    point.label = String::from("origin");

    let expected = boxed.get(&point).unwrap().take::<String>().unwrap();
    assert_eq!(typed.get(&point).unwrap(), expected);

    let wrong: &dyn Reflect = &3_i32;
    assert_eq!(typed.get(wrong).unwrap_err(), boxed.get(wrong).unwrap_err());
}

#[test]
fn typed_getter_as_presence_check() {
    let has_label =
        TypedGetter::<bool>::from_method(&MethodDescriptor::getter("has_label", Point::has_label))
            .unwrap();

    let mut point = Point::new(0);
    assert!(!has_label.get(&point).unwrap());

    point.label = String::from("a");
    assert!(has_label.get(&point).unwrap());
}

#[test]
fn typed_getter_requires_exact_result() {
    let method = MethodDescriptor::getter("x", Point::x);

    let err = TypedGetter::<i64>::from_method(&method).unwrap_err();
    assert_eq!(
        err,
        BuildError::ResultMismatch {
            method: "x",
            expected: "i64",
            actual: "i32",
        }
    );
}

// -----------------------------------------------------------------------------
// Setter

#[test]
fn boxed_setter_matches_direct_call() {
    let setter =
        BoxedSetter::from_method(&MethodDescriptor::setter("set_x", Point::set_x)).unwrap();

    let mut by_accessor = Point::new(5);
    let mut direct = Point::new(5);

    setter.set(&mut by_accessor, 7_i32.into_boxed_reflect()).unwrap();
    direct.set_x(7);

    assert_eq!(by_accessor, direct);
    assert_eq!(by_accessor.x, 7);
}

#[test]
fn boxed_setter_discards_result() {
    let setter = BoxedSetter::from_method(&MethodDescriptor::setter(
        "replace_label",
        Point::replace_label,
    ))
    .unwrap();

    let mut point = Point::new(1);
    setter
        .set(&mut point, String::from("moved").into_boxed_reflect())
        .unwrap();
    assert_eq!(point.label, "moved");
}

#[test]
fn boxed_setter_checks_before_calling() {
    let setter =
        BoxedSetter::from_method(&MethodDescriptor::setter("set_hits", Counter::set_hits))
            .unwrap();

    let before = COUNTER_SETS.load(Ordering::SeqCst);

    // Wrong target: checked first, even if the argument is wrong too.
    let mut point = Point::new(5);
    let err = setter
        .set(&mut point, "nine".into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(err, AccessError::TargetMismatch { .. }));
    assert_eq!(point, Point::new(5));

    // Wrong argument.
    let mut counter = Counter { hits: 2 };
    let err = setter
        .set(&mut counter, 9_i64.into_boxed_reflect())
        .unwrap_err();
    assert_eq!(
        err,
        AccessError::ArgumentMismatch {
            method: "set_hits",
            expected: "u32",
            actual: "i64",
        }
    );
    assert_eq!(counter.hits, 2);
    assert_eq!(COUNTER_SETS.load(Ordering::SeqCst), before);

    setter
        .set(&mut counter, 9_u32.into_boxed_reflect())
        .unwrap();
    assert_eq!(counter.hits, 9);
    assert_eq!(COUNTER_SETS.load(Ordering::SeqCst), before + 1);
}

// -----------------------------------------------------------------------------
// Action

#[test]
fn boxed_action_invokes_side_effect() {
    let clear = BoxedAction::from_method(&MethodDescriptor::action("clear", Point::clear)).unwrap();
    let hit = BoxedAction::from_method(&MethodDescriptor::action("hit", Counter::hit)).unwrap();

    let mut point = Point::new(4);
    point.label = String::from("p");
    clear.invoke(&mut point).unwrap();
    assert_eq!(point, Point::new(0));

    let mut counter = Counter { hits: 0 };
    hit.invoke(&mut counter).unwrap();
    hit.invoke(&mut counter).unwrap();
    assert_eq!(counter.hits, 2);

    let err = hit.invoke(&mut point).unwrap_err();
    assert!(matches!(err, AccessError::TargetMismatch { method: "hit", .. }));
}

#[test]
fn boxed_action_from_getter() {
    let action = BoxedAction::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();

    let mut point = Point::new(1);
    action.invoke(&mut point).unwrap();
    assert_eq!(point.x, 1);
}

// -----------------------------------------------------------------------------
// Shape

#[test]
fn shape_mismatch() {
    let getter = MethodDescriptor::getter("x", Point::x);
    let setter = MethodDescriptor::setter("set_x", Point::set_x);
    let action = MethodDescriptor::action("clear", Point::clear);

    assert_eq!(
        BoxedGetter::from_method(&setter).unwrap_err(),
        BuildError::ShapeMismatch {
            method: "set_x",
            accessor: "boxed getter",
            actual: MethodKind::Setter,
        }
    );
    assert!(BoxedGetter::from_method(&action).is_err());
    assert!(TypedGetter::<()>::from_method(&action).is_err());
    assert!(TypedGetter::<i32>::from_method(&setter).is_err());

    assert_eq!(
        BoxedSetter::from_method(&getter).unwrap_err(),
        BuildError::ShapeMismatch {
            method: "x",
            accessor: "boxed setter",
            actual: MethodKind::Getter,
        }
    );
    assert!(BoxedSetter::from_method(&action).is_err());

    assert!(matches!(
        BoxedAction::from_method(&setter),
        Err(BuildError::ShapeMismatch { accessor: "boxed action", .. })
    ));
}

// -----------------------------------------------------------------------------
// Accessor

#[test]
fn accessor_metadata() {
    let getter = BoxedGetter::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();
    let cloned = getter.clone();

    assert_eq!(cloned.method_name(), "x");
    assert_eq!(cloned.declaring_type(), &Type::of::<Point>());

    let debug = format!("{cloned:?}");
    assert!(debug.starts_with("BoxedGetter"));
    assert!(debug.contains("demo::shapes::Point"));
}

#[test]
fn independent_accessors() {
    let method = MethodDescriptor::getter("x", Point::x);
    let a = TypedGetter::<i32>::from_method(&method).unwrap();
    let b = TypedGetter::<i32>::from_method(&method).unwrap();
    drop(a);

    assert_eq!(b.get(&Point::new(8)).unwrap(), 8);
}

#[cfg(feature = "std")]
#[test]
fn concurrent_invocation() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BoxedGetter>();
    assert_send_sync::<TypedGetter<String>>();
    assert_send_sync::<BoxedSetter>();
    assert_send_sync::<BoxedAction>();
    assert_send_sync::<MethodDescriptor>();

    let getter = TypedGetter::<i32>::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();
    let points: alloc::vec::Vec<Point> = (0..64).map(Point::new).collect();

    std::thread::scope(|scope| {
        for chunk in points.chunks(16) {
            let getter = &getter;
            scope.spawn(move || {
                for point in chunk {
                    assert_eq!(getter.get(point).unwrap(), point.x);
                }
            });
        }
    });
}
