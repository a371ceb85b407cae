use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::OptionGroupRepository;
use crate::domain::catalog::use_cases::delete_option_group::{
    DeleteOptionGroupParams, DeleteOptionGroupUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteOptionGroupUseCaseImpl {
    pub repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteOptionGroupUseCase for DeleteOptionGroupUseCaseImpl {
    async fn execute(&self, params: DeleteOptionGroupParams) -> Result<(), CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting option group: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::OptionGroupNotFound))?;

        let blocking = self.repository.count_product_links(params.id).await?;
        if blocking > 0 {
            self.logger.warn(&format!(
                "Option group {} still linked to {} products",
                params.id, blocking
            ));
            return Err(CatalogError::OptionGroupInUse { blocking });
        }

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::OptionGroupNotFound))?;

        self.logger
            .info(&format!("Option group deleted: {}", params.id));
        Ok(())
    }
}
