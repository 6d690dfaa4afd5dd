use super::*;

/// Tests that pages hold the owner's posts, newest first, with the total count.
///
/// Expected: two pages of 2 and 1 posts, total 3, other owner excluded
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_post(db, user.id).await?;
    let second = factory::create_post(db, user.id).await?;
    let third = factory::create_post(db, user.id).await?;
    factory::create_post(db, other.id).await?;

    let repo = PostRepository::new(db);

    let (page_0, total) = repo.get_paginated(user.id, 0, 2).await?;
    let (page_1, _) = repo.get_paginated(user.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        page_0.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![third.id, second.id]
    );
    assert_eq!(page_1.iter().map(|p| p.id).collect::<Vec<_>>(), vec![first.id]);

    Ok(())
}

/// Tests that category and author summaries are attached to listed posts.
///
/// Expected: each post carries its own author, posts without one carry None
#[tokio::test]
async fn loads_category_and_author() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db, user.id).await?;
    let author = factory::create_author(db, user.id).await?;
    let with_relations = factory::post::PostFactory::new(db, user.id)
        .category_id(Some(category.id))
        .author_id(Some(author.id))
        .build()
        .await?;
    factory::create_post(db, user.id).await?;

    let (posts, _) = PostRepository::new(db).get_paginated(user.id, 0, 10).await?;

    for post in posts {
        if post.id == with_relations.id {
            assert_eq!(post.category.map(|c| c.id), Some(category.id));
            assert_eq!(post.author.map(|a| a.name), Some(author.name.clone()));
        } else {
            assert!(post.category.is_none());
            assert!(post.author.is_none());
        }
    }

    Ok(())
}
