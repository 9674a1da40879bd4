use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{
    CreateReportRequestDto, DeleteReportRequestDto, DeleteReportResponseDto,
    ListReportsRequestDto, ListReportsResponseDto, ReportResponseDto,
};
use crate::features::reports::models::NewReport;
use crate::features::reports::stores::ReportStore;
use crate::shared::validation::decode_uid;

/// Service for report operations
pub struct ReportService {
    store: Arc<dyn ReportStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// List one page of a category's reports, newest first
    pub async fn list(&self, dto: ListReportsRequestDto) -> Result<ListReportsResponseDto> {
        let category_id = decode_uid("category_id", &dto.category_id)?;
        let page = dto.page().resolve()?;

        let reports = self.store.list(category_id, page).await?;

        Ok(ListReportsResponseDto {
            reports: reports.into_iter().map(|r| r.into()).collect(),
            page_size: page.page_size,
            page_number: page.page_number,
        })
    }

    /// File a new report against a post comment
    pub async fn create(&self, dto: CreateReportRequestDto) -> Result<ReportResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let category_id = decode_uid("category_id", &dto.category_id)?;
        let post_id = decode_uid("post_id", &dto.post_id)?;
        let comment_id = decode_uid("comment_id", &dto.comment_id)?;

        let report = self
            .store
            .create(NewReport {
                category_id,
                post_id,
                comment_id,
                reason: dto.reason,
            })
            .await?;

        tracing::info!(
            "Report created: id={}, category_id={}, post_id={}",
            report.id,
            report.category_id,
            report.post_id
        );

        Ok(report.into())
    }

    /// Delete a report by id
    pub async fn delete(&self, dto: DeleteReportRequestDto) -> Result<DeleteReportResponseDto> {
        let id = decode_uid("id", &dto.id)?;

        self.store.delete(id).await?;

        tracing::info!("Report deleted: id={}", id);

        Ok(DeleteReportResponseDto::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::stores::InMemoryReportStore;
    use crate::shared::types::PageRequest;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    use uuid::Uuid;

    fn service() -> (ReportService, Arc<InMemoryReportStore>) {
        let store = Arc::new(InMemoryReportStore::new());
        (ReportService::new(store.clone()), store)
    }

    fn create_dto(category_id: Uuid, reason: &str) -> CreateReportRequestDto {
        CreateReportRequestDto {
            category_id: category_id.to_string(),
            post_id: Uuid::new_v4().to_string(),
            comment_id: Uuid::new_v4().to_string(),
            reason: reason.to_string(),
        }
    }

    fn list_dto(category_id: Uuid, page_size: i32, page_number: i32) -> ListReportsRequestDto {
        ListReportsRequestDto {
            category_id: category_id.to_string(),
            page_size,
            page_number,
        }
    }

    async fn stored_count(store: &InMemoryReportStore, category_id: Uuid) -> usize {
        let page = PageRequest::new(1000, 0).resolve().unwrap();
        store.list(category_id, page).await.unwrap().len()
    }

    #[tokio::test]
    async fn test_create_report() {
        let (service, _) = service();
        let category_id = Uuid::new_v4();
        let dto = create_dto(category_id, "spam");
        let post_id = dto.post_id.clone();

        let report = service.create(dto).await.unwrap();
        assert_eq!(report.reason, "spam");
        assert_eq!(report.category_id, category_id);
        assert_eq!(report.post_id.to_string(), post_id);
    }

    #[tokio::test]
    async fn test_create_report_empty_reason_writes_nothing() {
        let (service, store) = service();
        let category_id = Uuid::new_v4();

        let result = service.create(create_dto(category_id, "")).await;
        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("report reason is required")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(stored_count(&store, category_id).await, 0);
    }

    #[tokio::test]
    async fn test_create_report_malformed_identifiers() {
        let (service, store) = service();
        let category_id = Uuid::new_v4();

        let mut bad_post = create_dto(category_id, "spam");
        bad_post.post_id = "not-a-uid".to_string();
        let mut bad_comment = create_dto(category_id, "spam");
        bad_comment.comment_id = "not-a-uid".to_string();
        let mut bad_category = create_dto(category_id, "spam");
        bad_category.category_id = "not-a-uid".to_string();

        for dto in [bad_post, bad_comment, bad_category] {
            let result = service.create(dto).await;
            assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
        }
        assert_eq!(stored_count(&store, category_id).await, 0);
    }

    #[tokio::test]
    async fn test_list_reports_newest_first() {
        let (service, _) = service();
        let category_id = Uuid::new_v4();

        let a = service.create(create_dto(category_id, "a")).await.unwrap();
        let b = service.create(create_dto(category_id, "b")).await.unwrap();
        let c = service.create(create_dto(category_id, "c")).await.unwrap();

        let response = service.list(list_dto(category_id, 0, 0)).await.unwrap();
        assert_eq!(response.reports, vec![c, b, a]);
        assert_eq!(response.page_size, 10);
        assert_eq!(response.page_number, 0);
    }

    #[tokio::test]
    async fn test_list_reports_pages() {
        let (service, _) = service();
        let category_id = Uuid::new_v4();
        for _ in 0..5 {
            let reason: String = Sentence(2..6).fake();
            service
                .create(create_dto(category_id, &reason))
                .await
                .unwrap();
        }

        let second = service.list(list_dto(category_id, 2, 1)).await.unwrap();
        assert_eq!(second.reports.len(), 2);
        assert_eq!(second.page_size, 2);
        assert_eq!(second.page_number, 1);

        let past_end = service.list(list_dto(category_id, 2, 9)).await.unwrap();
        assert!(past_end.reports.is_empty());
    }

    #[tokio::test]
    async fn test_list_reports_malformed_category() {
        let (service, _) = service();
        let result = service
            .list(ListReportsRequestDto {
                category_id: "not-a-uid".to_string(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    }

    #[tokio::test]
    async fn test_list_reports_rejects_negative_page() {
        let (service, _) = service();
        let result = service.list(list_dto(Uuid::new_v4(), 10, -1)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_report_twice() {
        let (service, _) = service();
        let report = service
            .create(create_dto(Uuid::new_v4(), "spam"))
            .await
            .unwrap();
        let dto = DeleteReportRequestDto {
            id: report.id.to_string(),
        };

        service.delete(dto.clone()).await.unwrap();
        assert!(matches!(
            service.delete(dto).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_unknown_report() {
        let (service, _) = service();
        let result = service
            .delete(DeleteReportRequestDto {
                id: Uuid::new_v4().to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_malformed_id() {
        let (service, _) = service();
        let result = service
            .delete(DeleteReportRequestDto {
                id: "not-a-uid".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    }
}
