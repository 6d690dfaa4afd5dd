use super::*;

fn new_author(user_id: i32, name: &str) -> CreateAuthorParams {
    CreateAuthorParams::from_dto(
        user_id,
        CreateAuthorDto {
            name: name.to_string(),
            slug: None,
            description: Some("Writes things".to_string()),
        },
    )
}

/// Tests author creation with a derived slug and duplicate detection.
///
/// Expected: slug "jane-doe", then DuplicateSlug for the same name
#[tokio::test]
async fn creates_author_with_unique_slug() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let service = AuthorService::new(db);

    let author = service.create(new_author(owner.id, "Jane Doe")).await?;
    assert_eq!(author.slug, "jane-doe");
    assert_eq!(author.description.as_deref(), Some("Writes things"));

    let duplicate = service.create(new_author(owner.id, "Jane Doe")).await;
    assert!(matches!(
        duplicate,
        Err(AppError::ValidationErr(ValidationError::DuplicateSlug {
            entity: "author",
            scope: Scope::Owner,
        }))
    ));

    let listed = service.get_all(owner.id).await?;
    assert_eq!(listed.len(), 1);

    assert_eq!(service.delete(owner.id, "jane-doe").await?, Some(Vec::new()));
    assert!(service.get_by_slug(owner.id, "jane-doe").await?.is_none());

    Ok(())
}

/// Tests a name that yields no slug.
///
/// Expected: EmptySlug naming the name field
#[tokio::test]
async fn rejects_name_without_slug_characters() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let result = AuthorService::new(db).create(new_author(owner.id, "!!!")).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::EmptySlug {
            source_field: "name"
        }))
    ));

    Ok(())
}

/// Tests deleting an author whose posts carry images.
///
/// Expected: the author's post images are reported and the posts are gone
#[tokio::test]
async fn delete_reports_images_of_removed_posts() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let author = factory::author::AuthorFactory::new(db, owner.id)
        .slug("jane")
        .build()
        .await?;
    factory::post::PostFactory::new(db, owner.id)
        .author_id(Some(author.id))
        .image(Some("uploads/post/cover.jpg".to_string()))
        .build()
        .await?;

    let images = AuthorService::new(db).delete(owner.id, "jane").await?;

    assert_eq!(images, Some(vec!["uploads/post/cover.jpg".to_string()]));
    assert_eq!(PostService::new(db).get_paginated(owner.id, 0, 10).await?.total, 0);
    assert!(AuthorService::new(db).delete(owner.id, "jane").await?.is_none());

    Ok(())
}
