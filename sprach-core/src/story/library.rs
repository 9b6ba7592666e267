//! Built-in story content.

use super::{LocalizedText, Question, Story};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Difficulty level a story belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Short stories with an inline quiz on every page.
    A1,
    /// Longer stories read first and tested afterwards.
    Hard,
}

lazy_static! {
    static ref A1_STORIES: Vec<Story> = vec![sterntaler(), regenbogenfuchs()];
    static ref HARD_STORIES: Vec<Story> = vec![stimme_des_meeres(), leuchtturm()];
}

/// The built-in stories of a level, in reading order.
pub fn stories(level: Level) -> &'static [Story] {
    match level {
        Level::A1 => &A1_STORIES,
        Level::Hard => &HARD_STORIES,
    }
}

fn text(de: &str, ar: &str) -> LocalizedText {
    LocalizedText::new(de, ar)
}

fn question(prompt: LocalizedText, options: Vec<LocalizedText>, correct_option: usize) -> Question {
    Question {
        prompt,
        options,
        correct_option,
    }
}

fn sterntaler() -> Story {
    Story {
        id: "sterntaler".to_string(),
        title: text("🌙 Sterntaler", "🌙 ستيرنتالر"),
        paragraphs: vec![
            text(
                "In einer Nacht, in der der Himmel so dunkel war wie gepresste Schwarzkirschen, fiel ein Sterntaler vom Firmament herunter. Es landete leise im Gras eines stillen Dorfgartens. Dort spielte Lina, 7 Jahre alt, mit einem leeren Marmeladenglas. Sie seufzte: „Ich wünschte, ich könnte die Sterne einfangen und jedem Menschen ein kleines Glück schenken.“",
                "في ليلة كان فيها السماء مظلمة مثل الكرز الأسود المضغوط، سقط نجم من السماء. هبط بهدوء على عشب حديقة قرية هادئة. هناك كانت تلعب لينا، 7 سنوات، بمرطبان مربى فارغ. تنهدت: \"أتمنى لو أستطيع أن أمسك النجوم وأمنح كل إنسان سعادة صغيرة.\"",
            ),
            text(
                "Das Sterntaler hörte sie. Es glühte warm, flog in das Glas und wurde zu drei funkelnden Sternen. „Wähle weise“, flüsterte es. „Ein Stern für dich, ein Stern für eine Fremde, ein Stern für die Welt.“",
                "سمعها النجم. توهج دافئًا، وطار إلى المرطبان وأصبح ثلاثة نجوم متلألئة. \"اختاري بحكمة\"، همس. \"نجمة لكِ، نجمة لغريبة، نجمة للعالم.\"",
            ),
            text(
                "Lina dachte kurz nach, dann tat sie, was ihr Herz sagte. Den ersten Stern gab sie einem hungrigen Kätzchen. Den zweiten schickte sie mit einem geheimen Wort in die Nacht: „Mitgefühl“. Den dritten hielt sie im Glas und legte ihn auf das Fensterbrett, damit nie wieder jemand im Dunkeln allein ist.",
                "فكرت لينا قليلاً، ثم فعلت ما قاله قلبها. أعطت النجمة الأولى لقطة جائعة. أرسلت الثانية بكلمة سرية إلى الليل: \"تعاطف\". احتفظت بالثالثة في المرطبان ووضعتها على حافة النافذة، حتى لا يبقى أحد في الظلام وحده.",
            ),
            text(
                "Am nächsten Morgen war das Glas leer, aber im Garten wuchsen überall blaue Glühwürmchen, die das Wort „Mitgefühl“ leise summten.",
                "في الصباح التالي كان المرطبان فارغًا، لكن في الحديقة نمت يرقات زرقاء تهمس بكلمة \"تعاطف\" بهدوء.",
            ),
        ],
        questions: vec![
            question(
                text(
                    "Was war Linas erster Sternen-Wunsch?",
                    "ما كانت أول أمنية لينا مع النجوم؟",
                ),
                vec![
                    text("Eis essen gehen", "الذهاب لتناول الآيس كريم"),
                    text(
                        "Die Sterne einfangen, um anderen Glück zu bringen",
                        "إمساك النجوم لإسعاد الآخرين",
                    ),
                    text("Ein neues Fahrrad", "دراجة جديدة"),
                ],
                1,
            ),
            question(
                text(
                    "Welches geheime Wort schickte Lina in die Welt?",
                    "ما هي الكلمة السرية التي أرسلتها لينا إلى العالم؟",
                ),
                vec![
                    text("Mitgefühl", "تعاطف"),
                    text("Superstar", "نجم خارق"),
                    text("Schokolade", "شوكولاتة"),
                ],
                0,
            ),
            question(
                text(
                    "Was blieb am Ende im Garten zurück?",
                    "ماذا بقي في الحديقة في النهاية؟",
                ),
                vec![
                    text("Blaue Glühwürmchen", "يرقات زرقاء"),
                    text("Ein leeres Marmeladenglas", "مرطبان مربى فارغ"),
                    text("Beides", "كلاهما"),
                ],
                0,
            ),
        ],
        illustration: Some("/sterntaler.svg".to_string()),
    }
}

fn regenbogenfuchs() -> Story {
    Story {
        id: "regenbogenfuchs".to_string(),
        title: text(
            "📘 Der Regenbogenfuchs und die verlorene Farbe",
            "📘 ثعلب قوس قزح واللون المفقود",
        ),
        paragraphs: vec![
            text(
                "Tief im Silberwald lebte ein Fuchs namens Lumo, dessen Fell alle Regenbogenfarben schimmerte, bis auf eine: Grün fehlte ganz. Eines Morgens fand er einen kleinen Jungen, der weinte, weil seine Malbox nur noch Grau hergab. „Ohne Grün kann ich die Wiesen nicht malen!“",
                "في أعماق غابة الفضة عاش ثعلب اسمه لومو، كان فراؤه يلمع بكل ألوان قوس قزح ما عدا لون واحد: الأخضر كان مفقودًا تمامًا. في صباح أحد الأيام وجد صبيًا صغيرًا يبكي لأن علبة ألوانه لم تعد تنتج إلا الرمادي. \"بدون الأخضر لا أستطيع رسم المروج!\"",
            ),
            text(
                "Lumo schnupperte. Der Duft von frisch geschnittenem Gras kam aus einer verdunkelten Höhle. Dort saß ein alter Farbgeist, der sich einsam fühlte und deshalb alle Grüntöne eingesperrt hatte.",
                "شم لومو الهواء. جاء عطر العشب المقطوع حديثًا من كهف مظلم. هناك جلس روح الألوان العجوز، كان يشعر بالوحدة ولهذا حبس كل درجات اللون الأخضر.",
            ),
            text(
                "Statt zu kämpfen, fragte Lumo sanft: „Würdest du uns ein Stück deiner Einsamkeit abgeben, wenn wir dir einen Freund schenken?“ Der Geist zögerte, doch der Junge reichte ihm eine selbstgemalte Karte mit einer grünen Wiese und einem Fuchs.",
                "بدلاً من القتال، سأل لومو بلطف: \"هل تعطينا جزءًا من وحدتك إذا قدمنا لك صديقًا؟\" تردد الروح، لكن الصبي أعطاه بطاقة رسمها بنفسه عليها مرج أخضر وثعلب.",
            ),
            text(
                "So entstand die erste echte Freundschaftsfarbe. Der Geist weinte türkisfarbene Tränen, die Grün in den Wald zurückbrachten, und Lumos Fell wurde smaragdbunt. Seitdem trägt der Regenbogenfuchs alle Farben und niemals wieder Grau.",
                "هكذا وُلد أول لون صداقة حقيقي. بكى الروح دموعًا فيروزية أعادت الأخضر إلى الغابة، وأصبح فراء لومو ملونًا بالزمرد. منذ ذلك الحين يحمل ثعلب قوس قزح كل الألوان ولم يعد هناك رمادي أبدًا.",
            ),
        ],
        questions: vec![
            question(
                text(
                    "Welche Farbe fehlte im Fell von Lumo?",
                    "ما هو اللون الذي كان مفقودًا في فراء لومو؟",
                ),
                vec![
                    text("Rot", "أحمر"),
                    text("Grün", "أخضر"),
                    text("Blau", "أزرق"),
                ],
                1,
            ),
            question(
                text(
                    "Wer hatte alle Grüntöne eingesperrt?",
                    "من الذي حبس كل درجات اللون الأخضر؟",
                ),
                vec![
                    text("Der Farbgeist", "روح الألوان"),
                    text("Der Junge", "الصبي"),
                    text("Der Fuchs", "الثعلب"),
                ],
                0,
            ),
            question(
                text(
                    "Was bewirkte die Karte des Jungen?",
                    "ماذا فعلت بطاقة الصبي؟",
                ),
                vec![
                    text("Sie wurde zur neuen Freundschaft", "أصبحت صداقة جديدة"),
                    text("Sie löste einen Kampf aus", "تسببت في قتال"),
                    text("Sie verfärbte sich rosa", "تغير لونها إلى الوردي"),
                ],
                0,
            ),
        ],
        illustration: Some("/regenbogenfuchs.svg".to_string()),
    }
}

fn stimme_des_meeres() -> Story {
    Story {
        id: "stimmeMeer".to_string(),
        title: text("🌊 Die Stimme des Meeres", "🌊 صوت البحر"),
        paragraphs: vec![
            text(
                "Jeden Abend, wenn die Fischerboote in den Hafen zurückkehrten, setzte sich Samira auf die alte Steinmauer am Strand. Ihr Großvater hatte ihr erzählt, dass das Meer eine Stimme habe, die nur hören könne, wer wirklich still sei.",
                "كل مساء، عندما كانت قوارب الصيد تعود إلى الميناء، كانت سميرة تجلس على السور الحجري القديم عند الشاطئ. كان جدها قد أخبرها أن للبحر صوتًا لا يسمعه إلا من يكون هادئًا حقًا.",
            ),
            text(
                "Lange Zeit hörte Samira nur das Rauschen der Wellen und das Kreischen der Möwen. Doch in einer windstillen Nacht im Herbst legte sie ihr Telefon beiseite, schloss die Augen und atmete langsam. Da vernahm sie ein leises Summen, das wie ein altes Wiegenlied klang.",
                "لفترة طويلة لم تسمع سميرة سوى هدير الأمواج وصياح النوارس. لكن في ليلة خريفية ساكنة وضعت هاتفها جانبًا، وأغمضت عينيها، وتنفست ببطء. عندها سمعت همهمة خافتة تشبه تهويدة قديمة.",
            ),
            text(
                "Das Meer erzählte ihr von Schiffen, die vor Jahrhunderten Gewürze und Bücher zwischen fernen Ländern getragen hatten, und von Menschen, die verschiedene Sprachen sprachen und sich trotzdem verstanden. „Wer zuhört“, flüsterte es, „baut Brücken, die kein Sturm zerstören kann.“",
                "حكى لها البحر عن سفن حملت قبل قرون التوابل والكتب بين بلاد بعيدة، وعن أناس تحدثوا لغات مختلفة ومع ذلك فهموا بعضهم بعضًا. \"من يُصغي\"، همس البحر، \"يبني جسورًا لا تستطيع أي عاصفة أن تهدمها.\"",
            ),
            text(
                "Am nächsten Tag begann Samira, Deutsch zu lernen, damit sie den Kindern der neuen Familien in ihrer Straße die Geschichten des Meeres erzählen konnte. Aus Fremden wurden Nachbarn und aus Nachbarn Freunde.",
                "في اليوم التالي بدأت سميرة تتعلم الألمانية، لكي تحكي قصص البحر لأطفال العائلات الجديدة في شارعها. فصار الغرباء جيرانًا، وصار الجيران أصدقاء.",
            ),
        ],
        questions: vec![
            question(
                text(
                    "Wer hatte Samira von der Stimme des Meeres erzählt?",
                    "من أخبر سميرة عن صوت البحر؟",
                ),
                vec![
                    text("Ihre Lehrerin", "معلمتها"),
                    text("Ihr Großvater", "جدها"),
                    text("Ein Fischer", "صياد"),
                ],
                1,
            ),
            question(
                text(
                    "Was musste Samira tun, um die Stimme zu hören?",
                    "ماذا كان على سميرة أن تفعل لتسمع الصوت؟",
                ),
                vec![
                    text("Laut singen", "أن تغني بصوت عالٍ"),
                    text("Mit einem Boot hinausfahren", "أن تبحر بقارب"),
                    text("Ganz still werden und zuhören", "أن تهدأ تمامًا وتُصغي"),
                ],
                2,
            ),
            question(
                text(
                    "Warum begann Samira, Deutsch zu lernen?",
                    "لماذا بدأت سميرة تتعلم الألمانية؟",
                ),
                vec![
                    text(
                        "Um den Kindern in ihrer Straße Geschichten zu erzählen",
                        "لتحكي القصص لأطفال شارعها",
                    ),
                    text("Weil die Schule es verlangte", "لأن المدرسة طلبت ذلك"),
                    text("Um eine Reise zu gewinnen", "لتربح رحلة"),
                ],
                0,
            ),
        ],
        illustration: Some("/meer.svg".to_string()),
    }
}

fn leuchtturm() -> Story {
    Story {
        id: "leuchtturm".to_string(),
        title: text("🗼 Der letzte Leuchtturmwärter", "🗼 حارس المنارة الأخير"),
        paragraphs: vec![
            text(
                "Auf einer kleinen Insel in der Nordsee stand ein Leuchtturm, dessen Licht seit hundert Jahren jede Nacht über das Wasser wanderte. Der Wärter hieß Jonas, und er war der letzte, der die Lampe noch von Hand bediente.",
                "على جزيرة صغيرة في بحر الشمال كانت تقف منارة يتجول ضوؤها فوق الماء كل ليلة منذ مئة عام. كان اسم الحارس يوناس، وكان آخر من يشغّل المصباح بيده.",
            ),
            text(
                "Eines Tages kam ein Brief: Der Leuchtturm sollte automatisch werden, und Jonas würde nicht mehr gebraucht. Er las den Brief dreimal, faltete ihn sorgfältig und stieg wie immer die zweihundert Stufen hinauf.",
                "ذات يوم وصلت رسالة: ستصبح المنارة آلية، ولن تكون هناك حاجة إلى يوناس بعد الآن. قرأ الرسالة ثلاث مرات، وطواها بعناية، وصعد كعادته الدرجات المئتين.",
            ),
            text(
                "In seiner letzten Nacht zog ein schwerer Sturm auf, und der Strom auf der Insel fiel aus. Die neue Technik schwieg, doch Jonas zündete die alte Lampe an. Ein Boot mit drei Kindern fand im Licht den sicheren Weg in den Hafen.",
                "في ليلته الأخيرة هبت عاصفة شديدة وانقطعت الكهرباء عن الجزيرة. صمتت التقنية الجديدة، لكن يوناس أشعل المصباح القديم. وجد قارب يحمل ثلاثة أطفال الطريق الآمن إلى الميناء في ذلك الضوء.",
            ),
            text(
                "Am Morgen beschlossen die Inselbewohner, dass der Leuchtturm beides braucht: die neue Technik und einen Menschen, der auf sie achtet. Jonas blieb, und die Kinder besuchten ihn jeden Sonntag.",
                "في الصباح قرر سكان الجزيرة أن المنارة تحتاج إلى الاثنين: التقنية الجديدة وإنسانًا يعتني بها. بقي يوناس، وصار الأطفال يزورونه كل يوم أحد.",
            ),
        ],
        questions: vec![
            question(
                text(
                    "Was stand in dem Brief an Jonas?",
                    "ماذا كان مكتوبًا في الرسالة إلى يوناس؟",
                ),
                vec![
                    text(
                        "Der Leuchtturm sollte automatisch werden",
                        "أن المنارة ستصبح آلية",
                    ),
                    text("Er hatte einen Preis gewonnen", "أنه ربح جائزة"),
                    text("Der Leuchtturm sollte abgerissen werden", "أن المنارة ستُهدم"),
                ],
                0,
            ),
            question(
                text(
                    "Was geschah in der letzten Nacht?",
                    "ماذا حدث في الليلة الأخيرة؟",
                ),
                vec![
                    text("Es schneite auf der Insel", "تساقط الثلج على الجزيرة"),
                    text("Der Strom fiel während eines Sturms aus", "انقطعت الكهرباء أثناء عاصفة"),
                    text("Jonas verließ die Insel", "غادر يوناس الجزيرة"),
                ],
                1,
            ),
            question(
                text(
                    "Wie endet die Geschichte?",
                    "كيف تنتهي القصة؟",
                ),
                vec![
                    text("Jonas zieht in die Stadt", "ينتقل يوناس إلى المدينة"),
                    text("Der Leuchtturm wird geschlossen", "تُغلق المنارة"),
                    text("Jonas bleibt auf der Insel", "يبقى يوناس على الجزيرة"),
                ],
                2,
            ),
        ],
        illustration: None,
    }
}
