use mysite_polls::{Command, NO_CHOICE_MESSAGE, Query, VoteInput};
use mysite_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_vote_increments_by_one() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());
    let query = Query(state.read_db.clone());

    let id = helpers::create_question(&command, "Favorite color?", mysite_shared::now()).await?;
    let choices = helpers::create_choices(&command, id, ["Blue", "Red"]).await?;
    helpers::set_votes(&state, choices[0], 3).await?;

    command
        .vote(VoteInput {
            question_id: id,
            choice: Some(choices[0].to_string()),
        })
        .await?;

    let votes = query
        .choices(id)
        .await?
        .into_iter()
        .map(|c| c.votes)
        .collect::<Vec<_>>();
    assert_eq!(votes, vec![4, 0]);

    Ok(())
}

#[tokio::test]
async fn test_invalid_votes_change_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());
    let query = Query(state.read_db.clone());

    let id = helpers::create_question(&command, "Favorite color?", 0).await?;
    let other = helpers::create_question(&command, "Favorite food?", 0).await?;
    helpers::create_choices(&command, id, ["Blue", "Red"]).await?;
    let foreign = helpers::create_choices(&command, other, ["Pizza"]).await?;

    let inputs = [
        None,
        Some("".to_owned()),
        Some("blue".to_owned()),
        Some("9999".to_owned()),
        Some(foreign[0].to_string()),
    ];

    for choice in inputs {
        let result = command
            .vote(VoteInput {
                question_id: id,
                choice,
            })
            .await;

        match result {
            Err(Error::User(message)) => assert_eq!(message, NO_CHOICE_MESSAGE),
            _ => panic!("expected a user error"),
        }
    }

    assert!(query.choices(id).await?.iter().all(|c| c.votes == 0));
    assert!(query.choices(other).await?.iter().all(|c| c.votes == 0));

    Ok(())
}

#[tokio::test]
async fn test_concurrent_votes_are_all_counted() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());
    let query = Query(state.read_db.clone());

    let id = helpers::create_question(&command, "Favorite color?", 0).await?;
    let choices = helpers::create_choices(&command, id, ["Blue"]).await?;

    let fut = (0..20).map(|_| {
        command.vote(VoteInput {
            question_id: id,
            choice: Some(choices[0].to_string()),
        })
    });

    for result in futures::future::join_all(fut).await {
        result?;
    }

    assert_eq!(query.choices(id).await?[0].votes, 20);

    Ok(())
}
