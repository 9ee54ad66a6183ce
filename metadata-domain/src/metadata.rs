//! 元数据（Metadata）抽象
//!
//! 元数据是描述性的、可停用（retire）而不可删除的实体，例如属性类型、地点类型。
//!
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::value_object::Retirement;
use chrono::Utc;

/// 具备名称、描述与停用状态的实体
pub trait Metadata: Entity {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str>;

    fn retirement(&self) -> &Retirement;

    fn retirement_mut(&mut self) -> &mut Retirement;

    fn is_retired(&self) -> bool {
        self.retirement().is_retired()
    }

    /// 停用元数据；原因不能为空
    fn retire(&mut self, reason: &str) -> DomainResult<()> {
        let retirement = Retirement::retire(reason, Utc::now())?;
        *self.retirement_mut() = retirement;
        Ok(())
    }

    /// 恢复启用并清除停用信息
    fn unretire(&mut self) {
        *self.retirement_mut() = Retirement::default();
    }
}
