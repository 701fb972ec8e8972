use compile_testing_models::{FixtureFields, Member, ACC_PUBLIC, ACC_STATIC};

pub const CLASS_NAME: &str = "CompileTesting";

/// Member table of the `CompileTesting` class in declaration order.
///
/// Fields first, then the implicit constructor the compiler emits, then the
/// declared static methods.
pub fn describe() -> Vec<Member> {
    let fields = FixtureFields::default();
    vec![
        Member::field(0, "field1", "I", &fields.field1.to_string()),
        Member::field(0, "field2", "Ljava/lang/String;", &format!("{:?}", fields.field2)),
        Member::field(0, "field3", "Z", &fields.field3.to_string()),
        Member::method(ACC_PUBLIC, "<init>", "()V"),
        Member::method(ACC_PUBLIC | ACC_STATIC, "main", "([Ljava/lang/String;)V"),
        Member::method(ACC_PUBLIC | ACC_STATIC, "addNumbers", "(II)I"),
    ]
}

/// `method public static main ([Ljava/lang/String;)V` style line
pub fn render_member(m: &Member) -> String {
    let mut line = format!("{} ", m.kind.as_str());
    for modifier in m.modifiers() {
        line.push_str(modifier);
        line.push(' ');
    }
    line.push_str(&m.name);
    line.push(' ');
    line.push_str(&m.descriptor);
    if let Some(v) = &m.initial_value {
        line.push_str(" = ");
        line.push_str(v);
    }
    line
}
