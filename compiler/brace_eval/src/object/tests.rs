use super::*;
use brace_ir::Block;
use pretty_assertions::assert_eq;

fn decl(name: &str) -> Rc<FunctionDecl> {
    Rc::new(FunctionDecl {
        name: name.to_string(),
        params: Vec::new(),
        body: Block::default(),
    })
}

#[test]
fn defaults_per_declared_type() {
    assert_eq!(Object::default_for(ObjectType::Integer), Object::Integer(0));
    assert_eq!(
        Object::default_for(ObjectType::String),
        Object::String(String::new())
    );
    assert_eq!(Object::default_for(ObjectType::Function), Object::Function(None));
    assert_eq!(Object::default_for(ObjectType::Void), Object::Void);
}

#[test]
fn type_names_follow_keywords() {
    for ty in [TypeName::Int, TypeName::Str, TypeName::Fnc, TypeName::Void] {
        assert_eq!(ObjectType::from(ty).as_str(), ty.as_str());
    }
}

#[test]
fn assign_keeps_the_declared_type() {
    let mut obj = Object::Integer(1);
    assert_eq!(obj.assign("x", Object::Integer(5)), Ok(()));
    assert_eq!(obj, Object::Integer(5));

    let err = obj.assign("x", Object::from("five"));
    assert!(err.is_err());
    assert_eq!(obj, Object::Integer(5));

    let mut f = Object::Function(None);
    assert_eq!(f.assign("f", Object::function(decl("g"))), Ok(()));
    assert_eq!(f.to_string(), "<function g>");
}

#[test]
fn truthiness() {
    assert_eq!(Object::Integer(0).is_truthy(), Ok(false));
    assert_eq!(Object::Integer(-3).is_truthy(), Ok(true));
    assert_eq!(Object::from("").is_truthy(), Ok(false));
    assert_eq!(Object::from("a").is_truthy(), Ok(true));
    assert!(Object::Void.is_truthy().is_err());
    assert!(Object::Function(None).is_truthy().is_err());
}

#[test]
fn print_representation() {
    assert_eq!(Object::Integer(-12).to_string(), "-12");
    assert_eq!(Object::from("hi there").to_string(), "hi there");
    assert_eq!(Object::Void.to_string(), "");
    assert_eq!(Object::Function(None).to_string(), "<function>");
    assert_eq!(Object::function(decl("main")).to_string(), "<function main>");
}

#[test]
fn as_integer_rejects_other_types() {
    assert_eq!(Object::Integer(7).as_integer(), Ok(7));
    assert!(Object::from("7").as_integer().is_err());
}
