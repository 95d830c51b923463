use crate::EmployeeRegistration;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_complete_payload_when_deserialize_then_ok() {
    let value = json!({
        "id": 42,
        "nome": "Maria Souza",
        "dataNasc": "1990-05-17",
        "cpf": "123.456.789-00",
        "sexo": "F"
    });

    let registration: EmployeeRegistration = serde_json::from_value(value).unwrap();

    assert_that!(registration.id, eq(42));
    assert_eq!(registration.name, "Maria Souza");
    assert_eq!(registration.birth_date, "1990-05-17");
}

#[test]
fn given_null_field_when_deserialize_then_error() {
    let value = json!({
        "id": 42,
        "nome": null,
        "dataNasc": "1990-05-17",
        "cpf": "123.456.789-00",
        "sexo": "F"
    });

    let result = serde_json::from_value::<EmployeeRegistration>(value);

    assert_that!(result, err(anything()));
}

#[test]
fn given_missing_field_when_deserialize_then_error() {
    let value = json!({
        "id": 42,
        "nome": "Maria Souza",
        "dataNasc": "1990-05-17",
        "sexo": "F"
    });

    let result = serde_json::from_value::<EmployeeRegistration>(value);

    assert_that!(result, err(anything()));
}

#[test]
fn given_registration_when_serialize_then_uses_employee_service_field_names() {
    let registration = EmployeeRegistration::new(
        1,
        "Joao".to_string(),
        "1985-01-02".to_string(),
        "000.000.000-00".to_string(),
        "M".to_string(),
    );

    let value = serde_json::to_value(&registration).unwrap();

    assert_eq!(value["nome"], "Joao");
    assert_eq!(value["dataNasc"], "1985-01-02");
    assert_eq!(value["sexo"], "M");
}
