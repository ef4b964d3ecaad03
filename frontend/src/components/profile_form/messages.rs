use common::form::{FieldPath, FieldValue};

#[derive(Clone)]
pub enum Msg {
    Change(FieldPath, FieldValue),
    Blur(FieldPath),
    AddUser,
    RemoveUser(usize),
    Submit,
}
