
use ecocalc_test_utils::prelude::*;

use crate::model::student::RegisterStudentDto;

fn register_dto(name: &str, email: &str, calculation_id: i32) -> RegisterStudentDto {
    RegisterStudentDto {
        name: name.to_string(),
        email: email.to_string(),
        calculation_id,
    }
}
