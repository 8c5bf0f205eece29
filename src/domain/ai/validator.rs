use super::dto::TaskFields;
use super::task::TaskDefinition;
use crate::error::AppError;

/// 필수 필드 검증
///
/// 선언 순서대로 확인하며 처음 누락된 필드에서 바로 실패합니다.
pub fn validate_required_fields(
    definition: &TaskDefinition,
    fields: &TaskFields,
) -> Result<(), AppError> {
    for field in definition.required_fields {
        if fields.get_non_empty(field.name).is_none() {
            return Err(AppError::MissingField(field.label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ai::task::TaskKind;

    #[test]
    fn should_pass_when_field_present() {
        let fields = TaskFields::from_iter([("query".to_string(), "hi".to_string())]);

        let result = validate_required_fields(TaskKind::Categorize.definition(), &fields);

        assert!(result.is_ok());
    }

    #[test]
    fn should_fail_with_human_label() {
        let fields = TaskFields::default();

        let result = validate_required_fields(TaskKind::ExtractMedical.definition(), &fields);

        match result {
            Err(AppError::MissingField(label)) => assert_eq!(label, "medical notes"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn should_ignore_other_fields() {
        let fields = TaskFields::from_iter([("message".to_string(), "hi".to_string())]);

        let result = validate_required_fields(TaskKind::AnalyzeNewsletter.definition(), &fields);

        assert!(matches!(result, Err(AppError::MissingField("newsletter"))));
    }
}
