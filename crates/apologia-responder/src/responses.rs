//! The canned long-form answers selected by the rule tables.
//!
//! Markdown-ish formatting (headers, bullet markers) is preserved verbatim;
//! the client renders these strings as-is. Every constant here is referenced
//! by exactly one rule in [`crate::rules`] or one fallback tier in
//! [`crate::fallback`].

// ─── Debate-mode rule responses ──────────────────────────────────────────────

pub const JESUS_CLAIMED_DEITY: &str = "\
**Did Jesus claim to be God? The record says yes — repeatedly and unmistakably.**

Four passages make the claim explicit:

- **John 8:58** — \"Before Abraham was, I AM.\" Jesus takes the divine name of \
Exodus 3:14 for himself. His audience understood exactly what he meant: verse \
59 says they picked up stones to execute him for blasphemy.
- **Mark 14:61-62** — Under oath before the high priest, asked \"Are you the \
Christ, the Son of the Blessed?\", Jesus answers \"I am, and you will see the \
Son of Man seated at the right hand of Power.\" The court tore its robes and \
condemned him for blasphemy on the spot.
- **John 10:30** — \"I and the Father are one.\" Again the response is stones, \
and again the stated charge is explicit: \"because you, being a man, make \
yourself God\" (v. 33).
- **John 20:28** — Thomas addresses the risen Jesus as \"My Lord and my God,\" \
and Jesus accepts the worship rather than correcting it — something no \
faithful first-century Jew could do unless the title were true.

Notice the shape of the evidence: it is not merely that Jesus said elevated \
things about himself, but that every audience — disciples, crowds, and the \
Sanhedrin — *heard* a claim to deity and reacted accordingly. The options \
left open by that record are the classic three: the claim was false and he \
knew it, false and he didn't, or true. What is not available is the polite \
middle ground of \"great moral teacher who never claimed divinity.\"";

pub const TRINITY: &str = "\
**The Trinity: one God, three persons — a revealed doctrine, not a contradiction.**

A contradiction requires affirming and denying the same thing *in the same \
sense*. The doctrine affirms one divine **essence** and three distinct \
**persons** — different categories, so no logical contradiction arises, \
however far the reality outruns our intuitions.

The doctrine is forced on us by the data of Scripture taken together:

- There is exactly one God (Deuteronomy 6:4; Isaiah 45:5).
- The Father is God (John 6:27), the Son is God (John 1:1; Colossians 2:9), \
the Spirit is God (Acts 5:3-4).
- The three are distinct persons who speak to and about one another \
(Matthew 3:16-17; John 14:26).

Reject any one line and you fall into an old, named error: modalism (one \
person wearing masks), Arianism (a created Son), or tritheism (three gods). \
The church did not invent the Trinity at Nicaea; it wrote down the only \
formula that keeps all three lines of biblical data at once. That a being \
beyond space and time has an inner life richer than creaturely analogies can \
capture is exactly what we should expect.";

pub const BIBLE_RELIABILITY: &str = "\
**Has the Bible been corrupted? The manuscript evidence says the opposite.**

The claim of corruption runs into an inconvenient abundance of data:

- **Quantity**: over 5,800 Greek New Testament manuscripts, plus tens of \
thousands in Latin, Syriac, and Coptic — orders of magnitude more than any \
other ancient text. Homer's *Iliad*, the runner-up, has under 2,000.
- **Age**: fragments like P52 (John, ~AD 125) sit within a generation or two \
of the originals. Compare Caesar's *Gallic Wars*: a 900-year gap, and nobody \
doubts its text.
- **Cross-checks**: because copies multiplied early across three continents, \
no one had the power to alter them all. A change in Alexandria is exposed by \
copies in Antioch and Carthage. Textual critics — including skeptical ones — \
reconstruct the original to well above 99% confidence, and *not one* \
Christian doctrine rests on a disputed variant.

The remaining variants are spelling shifts, word order, and the occasional \
duplicated line — catalogued, footnoted in every modern translation, and \
hidden from no one. A corrupted book does not come with a public list of its \
own variants.";

pub const PROBLEM_OF_EVIL: &str = "\
**If God is good, why evil and suffering? The hardest question — and the one \
the cross answers.**

Three things need saying, in order:

1. **The logical problem cuts the other way.** Calling anything *evil* \
presupposes a standard of good that is more than private preference or \
evolutionary accident. Objective evil is evidence *for* an objective moral \
lawgiver, not against one. The atheist who protests evil is borrowing the \
very yardstick he denies.
2. **Love requires freedom.** A world of creatures who can genuinely love \
must be a world of creatures who can genuinely refuse. Much of what breaks \
our hearts is the bill for that freedom — ours and others'. Scripture never \
says this world is how God wants things; it says creation is groaning \
(Romans 8:22) and under judgment precisely because evil is real.
3. **God did not stay out of it.** Christianity is the only worldview whose \
God has a scar. At the cross the Judge steps into the dock, absorbs the \
worst evil — betrayal, injustice, torture, death — and turns it into the \
instrument of rescue. And the resurrection is the down payment on the day \
when every tear is wiped away (Revelation 21:4).

Suffering is not evidence that God is absent. It is the place where he is \
most proven present.";

pub const RESURRECTION: &str = "\
**The resurrection: the minimal facts even skeptical scholars grant.**

Build the case only from data conceded by the broad critical mainstream:

- **Jesus died by crucifixion** — attested by Tacitus and Josephus as well as \
all four gospels; Roman executioners did not fail.
- **The tomb was found empty** — reported first by women, whose testimony \
carried no weight in that culture. Nobody inventing the story writes it that \
way, and the authorities answered by accusing theft (Matthew 28:13), which \
concedes the tomb was empty.
- **Disciples had experiences they were convinced were the risen Jesus** — \
the creed of 1 Corinthians 15:3-7, dated by critical scholars to within a \
few years of the event, lists named witnesses and a crowd of five hundred.
- **Skeptics converted** — James, the unbelieving brother, and Paul, the \
persecutor, both flipped on the strength of what they said they saw, and \
both died for it.

Hallucinations are private and don't empty tombs; theft explains no one's \
willingness to die; legend needs generations, not a three-year-old creed. \
The explanation with actual reach is the one the witnesses gave: he is risen.";

pub const SALVATION_BY_GRACE: &str = "\
**Is salvation earned by works? No — and that is Christianity's sharpest break \
with every other system.**

Every religion of human effort runs on the same engine: perform, and perhaps \
be accepted. The gospel inverts it: *be accepted, then transformed.*

- **Grace, through faith**: \"For by grace you have been saved through faith. \
And this is not your own doing; it is the gift of God, not a result of \
works, so that no one may boast\" (Ephesians 2:8-9).
- **Why it can't be works**: the standard is God's own holiness, and \"all \
have sinned and fall short\" (Romans 3:23). A ladder that reaches nine-tenths \
of the way across the canyon saves no one.
- **Where works fit**: verse 10 of the same passage — we are \"created in \
Christ Jesus *for* good works.\" Works are the fruit of salvation, never its \
root. James 2 attacks a faith that produces nothing, not the sufficiency of \
grace.

The thief on the cross (Luke 23:42-43) had no time left for works at all — \
and went to paradise on a promise. That is the purest specimen of how anyone \
is saved.";

pub const HELL_AND_JUSTICE: &str = "\
**How can a loving God send anyone to hell? Look closely at who sends whom.**

- **Hell is a verdict on real guilt, not a temper tantrum.** If God is just, \
evil cannot simply be waved through. The same people who protest hell also \
protest a God who would ignore genocide; you cannot have both complaints.
- **The door is locked from the inside.** Judgment is handing people the \
independence from God they insisted on (Romans 1:24's \"God gave them up\"). \
C. S. Lewis's summary stands: either we say to God \"Thy will be done,\" or \
God says it to us.
- **The gravity of sin scales with the one offended.** Crimes against an \
infinite, infinitely good being are not parking tickets; measuring sin by \
its target rather than its duration is how all law already works.
- **The loving God and the judging God are the same God — at the cross.** \
Nobody in Scripture speaks of hell more often than Jesus, and no one did \
more to keep people out of it. The alternative to judgment on offer is not \
indifference; it is substitution: \"God so loved the world that he gave his \
only Son\" (John 3:16).

The question is never whether God will get justice, but whether we will let \
him bear it for us.";

pub const SCIENCE_AND_FAITH: &str = "\
**Science versus Christianity? Modern science was cradled by the doctrine of \
creation.**

- **The conflict thesis is bad history.** Kepler, Galileo, Boyle, Newton, \
Faraday, Maxwell, Pasteur — the architects of science worked from an \
explicitly theological premise: a rational Lawgiver makes a lawful, \
intelligible universe worth studying. Science grew where creation doctrine \
prepared the soil, and historians of science have largely abandoned the \
warfare narrative.
- **The universe had a beginning.** Whatever begins to exist has a cause; \
standard cosmology hands theism its opening premise. \"In the beginning\" \
stopped being a religious eccentricity the day the Big Bang displaced the \
steady state.
- **The constants are set on a knife's edge.** Alter the cosmological \
constant or the strong force by a hair and chemistry, stars, and observers \
never arise. Fine-tuning demands a selector — and a multiverse generator \
would itself need tuning.
- **Scripture tells *why*, science tells *how*.** Genesis is a royal \
proclamation of who made all things and to what end, not a lab protocol. \
Christians differ on the age of the earth; none of those positions touches \
the core claim that the universe is a creation.

The God hypothesis is not a gap-filler shrinking before science. It is the \
explanation for why science works at all.";

pub const OTHER_RELIGIONS: &str = "\
**Don't all religions teach the same thing? Only if nobody reads them.**

- **They contradict at the center, not the edges.** Islam denies Jesus was \
crucified (Surah 4:157); the crucifixion is history's best-attested \
execution and Christianity's heart. Buddhism seeks liberation from the self; \
Christianity seeks the self's redemption. Hinduism has many gods and many \
lives; the gospel has one God and one death, then judgment (Hebrews 9:27). \
These cannot all be true — the law of non-contradiction takes no holidays.
- **Shared ethics don't mean shared truth.** Most systems converge on \
honesty and compassion; so do most legal codes. The religions divide on the \
diagnosis (sin? ignorance? illusion?) and the cure — and the cure is the \
whole question.
- **Christianity's claim is checkable.** Uniquely, it stakes everything on a \
public event: \"if Christ has not been raised, your faith is futile\" \
(1 Corinthians 15:17). No other founder submitted his message to that kind \
of falsification.
- **Grace stands alone.** Every alternative hands you a ladder — karma, the \
Five Pillars, the Eightfold Path. Only the gospel reports that God climbed \
down.

Jesus' claim is not that all roads converge, but \"I am the way\" (John 14:6). \
That claim is either false, or it settles the comparison.";

pub const PREDESTINATION: &str = "\
**Predestination and free will: both are in the book, and neither cancels the \
other.**

- **The data cuts both ways on purpose.** God \"chose us in him before the \
foundation of the world\" (Ephesians 1:4), and \"whoever will may come\" \
(Revelation 22:17). Scripture asserts sovereign election and real human \
responsibility side by side — sometimes in one sentence (Acts 2:23).
- **The cross is the proof case.** The most predestined event in history — \
\"the definite plan and foreknowledge of God\" — was carried out by men whom \
Peter, in the same breath, calls lawless and accountable. Sovereignty and \
responsibility ran through the same afternoon without colliding.
- **Mystery is not contradiction.** An author ordains every line of the \
story, yet the characters act from their own motives. That analogy limps \
like all analogies, but it shows the two claims occupy different levels \
rather than the same level in conflict.
- **What the doctrine is *for*.** Election is pastoral in every passage it \
appears: assurance (no one snatches them from my hand, John 10:28), \
humility (nothing left to boast over), and courage in mission (\"I have many \
in this city who are my people,\" Acts 18:10).

Faithful Christians — Augustinian, Reformed, Arminian — weight the emphasis \
differently while agreeing on this: salvation is God's doing from first to \
last, and the invitation is genuinely for everyone.";

pub const EVIDENCE_METHOD: &str = "\
**\"What's your evidence?\" — fair question. Christianity answers in public \
arguments, not private feelings.**

The case is cumulative, each line independent:

1. **Cosmological**: whatever begins to exist has a cause; the universe \
began; therefore a cause beyond space, time, and matter.
2. **Fine-tuning**: the physical constants permit life against odds that \
make chance a non-starter and necessity an assertion.
3. **Moral**: if objective moral facts exist — and torturing children for \
fun is *really* wrong — their ground must be more than primate consensus.
4. **Historical**: the minimal facts around Jesus' death and resurrection \
(empty tomb, appearances, transformed skeptics) are best explained by the \
event his followers proclaimed.
5. **Reason itself**: if thoughts are nothing but non-rational particle \
motion, the thought \"atheism is true\" saws off the branch it sits on.

Note the method: these are inferences to the best explanation from shared, \
public data — the same reasoning used in history, law, and science. Faith in \
the biblical sense is not belief without evidence; it is trust *on* evidence \
(Acts 1:3 speaks of \"many proofs\"). Pick any one of the five and press on \
it; the case does not hang from a single thread.";

// ─── Chat-mode trigger response ──────────────────────────────────────────────

pub const CHAT_DIVINITY: &str = "\
**Great question — the deity of Christ is the hinge of everything.**

The short answer: yes, Jesus claimed to be God, his enemies executed him for \
exactly that claim, and his resurrection vindicated it. Start with John 8:58 \
(\"Before Abraham was, I AM\") and Mark 14:61-62 (the confession under oath \
that got him condemned for blasphemy), then notice that the earliest \
Christians — strict Jewish monotheists — prayed to him, sang to him, and \
called him *Kyrios*, the Septuagint's word for YHWH, within a few years of \
his death. That is not a legend's timetable. If you want to dig deeper, ask \
me about any one of those passages and we'll walk through it together.";

// ─── Interrogative-tier sub-topics ───────────────────────────────────────────

pub const CONTRADICTIONS: &str = "\
**Alleged Bible contradictions: the claim is common, the survivors are few.**

Most alleged contradictions dissolve under three ordinary reading rules:

- **Difference is not contradiction.** Matthew mentions one angel at the \
tomb, John mentions two; \"one\" is not \"only one.\" Independent witnesses \
select different details — identical accounts would suggest collusion, and \
prosecutors treat them that way.
- **Read genre and idiom.** Ancient biography compresses, orders thematically, \
and paraphrases speech. Judging it by the conventions of a modern court \
transcript is an anachronism, not an argument.
- **Check the actual text.** A large share of popular examples rest on \
misquotation or on reading a translation quirk as a textual fact.

Take the strongest case you know — the death of Judas, the census of \
Quirinius, the genealogies — and examine it with those rules; each has \
serious published resolutions. The gospels' surface tension with deep \
agreement is precisely the fingerprint of independent testimony about real \
events.";

pub const ARCHAEOLOGY: &str = "\
**What does archaeology and history say? The spade has been kind to the Bible.**

A sampling of once-doubted details later dug out of the ground:

- **The Pilate stone** (Caesarea, 1961) — the prefect who sentenced Jesus, \
named in inscription after skeptics had questioned the title.
- **The pool of Bethesda** with its five colonnades (John 5:2) — dismissed \
as Johannine invention until excavation matched the description.
- **The Tel Dan stele** — \"House of David,\" extra-biblical, ninth century \
BC, after a century of claims that David was a myth.
- **Caiaphas's ossuary**, the **Erastus inscription** at Corinth (Romans \
16:23), Luke's precise titles — *politarchs* in Thessalonica, *proconsul* \
in Cyprus — each once counted an error, each since confirmed.

Beyond archaeology, non-Christian writers — Tacitus, Josephus, Pliny, \
Suetonius — independently anchor the public facts: Jesus lived, was executed \
under Pilate, and was worshiped as God by a movement that would not die. \
Archaeology cannot prove a miracle, but it keeps catching the biblical \
authors telling the truth about everything we *can* check — which is exactly \
how credibility works with witnesses.";

// ─── Question-type boilerplate (comprehensive-response heuristic) ────────────

pub const WHY_NOTE: &str = "Questions that begin with \"why\" reach for \
purpose, and purpose is where the Christian framework is at its strongest: \
persons, not particles, are the bottom layer of reality.";

pub const HOW_NOTE: &str = "Questions of \"how\" are usually questions of \
mechanism, and mechanism never competes with agency — explaining how the \
kettle boils does not explain away the one who wanted tea.";

pub const WHAT_NOTE: &str = "Questions of \"what\" are definitional, and most \
debates in this territory are settled the moment terms are defined carefully \
— so let us define them carefully.";

pub const GENERAL_NOTE: &str = "Whatever angle the question comes from, the \
method stays the same: public evidence, tested inference, and a conclusion \
held with exactly the confidence the evidence earns.";
