#[macro_export]
macro_rules! assert_classifications {
    (
        $(
            $test_name:ident : identifier => $identifier:expr, priority => $priority:expr, changefreq => $changefreq:ident
        ),+ $(,)?
    ) => {
        $(
            #[test]
            fn $test_name() {
                let classification = anchormap::classify($identifier, None);

                assert_that(&classification.priority.to_string()).is_equal_to($priority.to_owned());
                assert_that(&classification.change_frequency)
                    .is_equal_to(anchormap::ChangeFrequency::$changefreq);
            }
        )+
    }
}
