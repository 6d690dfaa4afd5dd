use super::*;

/// Tests that deleting a category removes the posts filed under it.
///
/// Expected: category and post gone
#[tokio::test]
async fn deletes_category_and_its_posts() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db, user.id).await?;
    let post = factory::post::PostFactory::new(db, user.id)
        .category_id(Some(category.id))
        .build()
        .await?;

    CategoryRepository::new(db).delete(category.id).await?;

    assert!(entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Post::find_by_id(post.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
