use serde::{Deserialize, Serialize};

/// Instance fields declared on the `CompileTesting` class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureFields {
    pub field1: i32,
    pub field2: String,
    pub field3: bool,
}

impl Default for FixtureFields {
    fn default() -> Self {
        Self {
            field1: 10,
            field2: "Hello, World!".to_string(),
            field3: true,
        }
    }
}

/// Outcome of one execution of the fixture's `main`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub result: i32,
    pub message_length: usize,
    pub numbers: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    Method,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Method => "method",
        }
    }
}

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;

/// Modifier keywords in source order, paired with their access flag
const ACCESS_NAMES: [(u16, &str); 5] = [
    (ACC_PUBLIC, "public"),
    (ACC_PRIVATE, "private"),
    (ACC_PROTECTED, "protected"),
    (ACC_STATIC, "static"),
    (ACC_FINAL, "final"),
];

/// One row of a class member table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Class-file access flags; 0 means package-private
    pub access: u16,
    pub name: String,
    pub kind: MemberKind,
    /// JVM descriptor, e.g. `I` or `(II)I`
    pub descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub initial_value: Option<String>,
}

impl Member {
    pub fn field(access: u16, name: &str, descriptor: &str, initial_value: &str) -> Self {
        Self {
            access,
            name: name.to_string(),
            kind: MemberKind::Field,
            descriptor: descriptor.to_string(),
            initial_value: Some(initial_value.to_string()),
        }
    }

    pub fn method(access: u16, name: &str, descriptor: &str) -> Self {
        Self {
            access,
            name: name.to_string(),
            kind: MemberKind::Method,
            descriptor: descriptor.to_string(),
            initial_value: None,
        }
    }

    pub fn is_static(&self) -> bool {
        self.access & ACC_STATIC != 0
    }

    /// Modifier keywords set in `access`, e.g. `["public", "static"]`
    pub fn modifiers(&self) -> Vec<&'static str> {
        ACCESS_NAMES
            .iter()
            .filter(|(flag, _)| self.access & flag != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fields_match_declarations() {
        let f = FixtureFields::default();
        assert_eq!(f.field1, 10);
        assert_eq!(f.field2, "Hello, World!");
        assert!(f.field3);
    }

    #[test]
    fn fields_roundtrip() {
        let f = FixtureFields::default();
        let s = serde_json::to_string(&f).unwrap();
        assert_eq!(s, r#"{"field1":10,"field2":"Hello, World!","field3":true}"#);

        let got: FixtureFields = serde_json::from_str(&s).unwrap();
        assert_eq!(got, f);
    }

    #[test]
    fn member_kind_serializes_lowercase() {
        let m = Member::method(ACC_PUBLIC | ACC_STATIC, "addNumbers", "(II)I");
        let s = serde_json::to_string(&m).unwrap();
        assert!(s.contains(r#""kind":"method""#));
        assert!(s.contains(r#""access":9"#));
        assert!(!s.contains("initial_value"));

        let got: Member = serde_json::from_str(&s).unwrap();
        assert_eq!(got, m);
    }

    #[test]
    fn field_member_keeps_initial_value() {
        let m = Member::field(0, "field1", "I", "10");
        assert_eq!(m.kind, MemberKind::Field);
        assert!(!m.is_static());
        assert!(m.modifiers().is_empty());
        assert_eq!(m.initial_value.as_deref(), Some("10"));
    }

    #[test]
    fn modifiers_follow_source_order() {
        let m = Member::method(ACC_STATIC | ACC_FINAL | ACC_PUBLIC, "f", "()V");
        assert!(m.is_static());
        assert_eq!(m.modifiers(), vec!["public", "static", "final"]);
    }
}
