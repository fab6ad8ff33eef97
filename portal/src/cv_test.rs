use super::*;

#[test]
fn sample_has_one_education_and_one_job() {
    let cv = Cv::sample();
    assert_eq!(cv.name, "Cv Belo");
    assert_eq!(cv.education.len(), 1);
    assert_eq!(cv.work_experience.len(), 1);
    assert_eq!(cv.education[0].institution, "Nnamdi Azikiwe University");
    assert_eq!(cv.work_experience[0].company, "MyJobMag Limited");
}

#[test]
fn sample_is_the_same_record_every_time() {
    assert!(std::ptr::eq(Cv::sample(), Cv::sample()));
}

#[test]
fn completion_is_constant() {
    assert_eq!(Cv::sample().completion_percent(), 100);
    assert_eq!(COMPLETION_PERCENT, 100);
}

#[test]
fn contact_line_joins_fields() {
    assert_eq!(
        Cv::sample().contact_line(),
        "Email: cv@myjobmag.com | Phone: 07066839654 | Age: 1946-06-05 (74 years)"
    );
}

#[test]
fn residence_line_joins_fields() {
    assert_eq!(
        Cv::sample().residence_line(),
        "State of Origin: Bayelsa | State of Residence: Lagos | LGA of Residence: Eti Osa"
    );
}
