use chrono::Utc;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub active: bool,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Category {
            base: BaseAggregate::with_metadata(
                CategoryId(uuid),
                m.name,
                m.description,
                metadata,
            ),
            color: m.color,
            active: m.active,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Порядок выдачи — порядок вставки; клиент список не пересортировывает
pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    let items: Vec<Category> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Category>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Поиск по точному названию среди неудалённых (проверка уникальности)
pub async fn get_by_name(name: &str) -> anyhow::Result<Option<Category>> {
    let result = Entity::find()
        .filter(Column::Name.eq(name))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Category) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.base.name.clone()),
        description: Set(aggregate.base.description.clone()),
        color: Set(aggregate.color.clone()),
        active: Set(aggregate.active),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Category) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        name: Set(aggregate.base.name.clone()),
        description: Set(aggregate.base.description.clone()),
        color: Set(aggregate.color.clone()),
        active: Set(aggregate.active),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_maps_to_aggregate() {
        let uuid = Uuid::new_v4();
        let created = Utc::now();
        let m = Model {
            id: uuid.to_string(),
            name: "Электроника".into(),
            description: Some("Техника и гаджеты".into()),
            color: Some("#FF5733".into()),
            active: true,
            is_deleted: false,
            created_at: Some(created),
            updated_at: Some(created),
            version: 3,
        };

        let category: Category = m.into();
        assert_eq!(category.base.id.value(), uuid);
        assert_eq!(category.base.name, "Электроника");
        assert_eq!(category.base.description.as_deref(), Some("Техника и гаджеты"));
        assert_eq!(category.color.as_deref(), Some("#FF5733"));
        assert!(category.active);
        assert_eq!(category.base.metadata.version, 3);
        assert_eq!(category.base.metadata.created_at, created);
    }

    #[test]
    fn model_without_timestamps_gets_fallbacks() {
        let m = Model {
            id: Uuid::new_v4().to_string(),
            name: "Одежда".into(),
            description: None,
            color: None,
            active: false,
            is_deleted: false,
            created_at: None,
            updated_at: None,
            version: 0,
        };

        let category: Category = m.into();
        assert!(!category.active);
        assert!(category.color.is_none());
        // created_at/updated_at подставляются текущим временем
        assert!(category.base.metadata.created_at <= Utc::now());
    }
}
